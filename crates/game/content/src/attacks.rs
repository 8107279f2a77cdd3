//! The built-in attack catalog.
//!
//! Each constructor returns a fresh [`Attack`] value; entities own their
//! movesets, so nothing here is shared or mutated in place.

use crawl_core::{Accuracy, Attack, OnHitEffect, StatKind, TargetSelector};

/// Charges the foe with a full-body tackle.
pub fn tackle() -> Attack {
    Attack {
        name: "Tackle".into(),
        power: Some(7),
        accuracy: Accuracy::Percent(95),
        target: TargetSelector::Front {
            cuts_corners: false,
        },
        on_hit: Vec::new(),
    }
}

/// Heats the entire room the user is in to dangerous levels.
pub fn overheat() -> Attack {
    Attack {
        name: "Overheat".into(),
        power: Some(10),
        accuracy: Accuracy::Percent(80),
        target: TargetSelector::Room {
            include_self: false,
            include_allies: false,
        },
        on_hit: Vec::new(),
    }
}

/// Calms the user, raising their attack and defense.
pub fn calm_mind() -> Attack {
    Attack {
        name: "Calm Mind".into(),
        power: None,
        accuracy: Accuracy::Always,
        target: TargetSelector::User,
        on_hit: vec![
            OnHitEffect::StatChange {
                stat: StatKind::Attack,
                amount: 1,
            },
            OnHitEffect::StatChange {
                stat: StatKind::Defense,
                amount: 1,
            },
        ],
    }
}

/// Growls cutely to reduce nearby foes' attack.
pub fn growl() -> Attack {
    Attack {
        name: "Growl".into(),
        power: None,
        accuracy: Accuracy::Always,
        target: TargetSelector::Room {
            include_self: false,
            include_allies: false,
        },
        on_hit: vec![OnHitEffect::StatChange {
            stat: StatKind::Attack,
            amount: -1,
        }],
    }
}

/// Squirts water to attack the foe.
pub fn water_gun() -> Attack {
    Attack {
        name: "Water Gun".into(),
        power: Some(5),
        accuracy: Accuracy::Percent(88),
        target: TargetSelector::Front {
            cuts_corners: false,
        },
        on_hit: Vec::new(),
    }
}

/// Lowers the target's defense by one stage.
pub fn tail_whip() -> Attack {
    Attack {
        name: "Tail Whip".into(),
        power: None,
        accuracy: Accuracy::Percent(100),
        target: TargetSelector::Front {
            cuts_corners: false,
        },
        on_hit: vec![OnHitEffect::StatChange {
            stat: StatKind::Defense,
            amount: -1,
        }],
    }
}

/// Inflicts damage on the target. It never misses, even around corners.
pub fn swift() -> Attack {
    Attack {
        name: "Swift".into(),
        power: Some(10),
        accuracy: Accuracy::Always,
        target: TargetSelector::Front { cuts_corners: true },
        on_hit: Vec::new(),
    }
}

/// Every built-in attack, for registries and pickers.
pub fn all() -> Vec<Attack> {
    vec![
        tackle(),
        overheat(),
        calm_mind(),
        growl(),
        water_gun(),
        tail_whip(),
        swift(),
    ]
}
