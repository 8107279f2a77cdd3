//! The built-in item blueprints.
//!
//! Behavior is expressed as capability-keyed effect programs: the engine
//! looks a hook up by tag and interprets the effects. The reviver seed is the
//! interesting one — its defeat hook revives the holder and then transforms
//! the instance into a plain seed, leaving only the use hook behind.

use std::collections::BTreeMap;

use crawl_core::{
    EquipEffect, HookBehavior, ItemBlueprint, ItemEffect, ItemHook, ItemVerb, StatKind, ThrowRule,
};

fn edible_actions() -> BTreeMap<ItemVerb, Vec<String>> {
    BTreeMap::from([
        (ItemVerb::Use, vec!["eat".into(), "use".into()]),
        (ItemVerb::Drop, vec!["drop".into()]),
        (ItemVerb::Throw, vec!["throw".into()]),
    ])
}

fn throwable_actions() -> BTreeMap<ItemVerb, Vec<String>> {
    BTreeMap::from([(
        ItemVerb::Throw,
        vec!["throw".into(), "use".into(), "hurl".into()],
    )])
}

/// What a spent reviver seed turns into.
pub fn plain_seed() -> ItemBlueprint {
    ItemBlueprint {
        name: "Plain Seed".into(),
        description: "Does nothing in particular.  Fills the energy slightly when eaten.".into(),
        actions: edible_actions(),
        handlers: BTreeMap::from([(
            ItemHook::Use,
            HookBehavior::Effects(vec![
                ItemEffect::RestoreEnergy(60),
                ItemEffect::Announce("{name} ate the Plain Seed!".into()),
            ]),
        )]),
        equip: None,
    }
}

/// Revives the holder on defeat.  Fills the energy slightly when eaten.
pub fn reviver_seed() -> ItemBlueprint {
    ItemBlueprint {
        name: "Reviver Seed".into(),
        description: "Revives the holder on defeat.  Fills the energy slightly when eaten.".into(),
        actions: edible_actions(),
        handlers: BTreeMap::from([
            (
                ItemHook::Use,
                HookBehavior::Effects(vec![
                    ItemEffect::RestoreEnergy(60),
                    ItemEffect::Announce("{name} ate the Reviver Seed!".into()),
                ]),
            ),
            (
                ItemHook::EntityDefeat,
                HookBehavior::Effects(vec![
                    ItemEffect::ReviveFull,
                    ItemEffect::Announce("{name} was revived by the Reviver Seed!".into()),
                    ItemEffect::Announce("The Reviver Seed turned into a Plain Seed!".into()),
                    ItemEffect::TransformInto(Box::new(plain_seed())),
                ]),
            ),
        ]),
        equip: None,
    }
}

/// A sweet berry.  Heals some hp and fills the energy when eaten.
pub fn oran_berry() -> ItemBlueprint {
    ItemBlueprint {
        name: "Oran Berry".into(),
        description: "A sweet berry.  Heals 20 HP and fills the energy slightly when eaten.".into(),
        actions: edible_actions(),
        handlers: BTreeMap::from([(
            ItemHook::Use,
            HookBehavior::Effects(vec![
                ItemEffect::Announce("{name} ate the Oran Berry!".into()),
                ItemEffect::RestoreHp(20),
                ItemEffect::RestoreEnergy(90),
            ]),
        )]),
        equip: None,
    }
}

/// Why did you equip this?!?
pub fn antidefense_scarf() -> ItemBlueprint {
    ItemBlueprint {
        name: "Antidefense Scarf".into(),
        description: "Why did you equip this?!?".into(),
        actions: BTreeMap::from([(ItemVerb::Drop, vec!["drop".into()])]),
        handlers: BTreeMap::new(),
        equip: Some(EquipEffect::ModifierDelta {
            stat: StatKind::Defense,
            delta: -6,
        }),
    }
}

/// Can be thrown in a straight line for some damage.
pub fn stick() -> ItemBlueprint {
    ItemBlueprint {
        name: "Stick".into(),
        description: "Can be thrown in a straight line for some damage.".into(),
        actions: throwable_actions(),
        handlers: BTreeMap::from([
            (
                ItemHook::Collide,
                HookBehavior::Effects(vec![ItemEffect::InflictDamage(20)]),
            ),
            (ItemHook::ThrowTarget, HookBehavior::Throw(ThrowRule::Straight)),
        ]),
        equip: None,
    }
}

/// Can be thrown at most one space forward, but hits hard.
pub fn rock() -> ItemBlueprint {
    ItemBlueprint {
        name: "Heavy Rock".into(),
        description: "Can be thrown at most one space forward, but deals 100 damage if it hits."
            .into(),
        actions: throwable_actions(),
        handlers: BTreeMap::from([
            (
                ItemHook::Collide,
                HookBehavior::Effects(vec![ItemEffect::InflictDamage(100)]),
            ),
            (
                ItemHook::ThrowTarget,
                HookBehavior::Throw(ThrowRule::Fixed(1)),
            ),
        ]),
        equip: None,
    }
}

/// Every built-in blueprint.
pub fn all() -> Vec<ItemBlueprint> {
    vec![
        reviver_seed(),
        plain_seed(),
        oran_berry(),
        antidefense_scarf(),
        stick(),
        rock(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviver_seed_spends_itself_into_a_plain_seed() {
        let mut item = reviver_seed().instantiate();
        let effects = item.effects(ItemHook::EntityDefeat).unwrap().to_vec();
        let transform = effects
            .iter()
            .find_map(|effect| match effect {
                ItemEffect::TransformInto(blueprint) => Some(blueprint),
                _ => None,
            })
            .expect("reviver seed must transform after use");
        item.transform_into(transform);
        assert_eq!(item.name, "Plain Seed");
        assert!(item.effects(ItemHook::EntityDefeat).is_none());
        assert!(item.effects(ItemHook::Use).is_some());
    }

    #[test]
    fn throwables_declare_throw_targeting() {
        assert_eq!(stick().instantiate().throw_rule(), Some(ThrowRule::Straight));
        assert_eq!(rock().instantiate().throw_rule(), Some(ThrowRule::Fixed(1)));
        assert_eq!(oran_berry().instantiate().throw_rule(), None);
    }

    #[test]
    fn scarf_only_overrides_while_held() {
        let scarf = antidefense_scarf();
        assert!(matches!(
            scarf.equip,
            Some(EquipEffect::ModifierDelta {
                stat: StatKind::Defense,
                delta: -6
            })
        ));
        assert!(scarf.handlers.is_empty());
    }
}
