//! Default player loadout.
//!
//! The session layer combines a spec with a controller and a spawn location
//! to build the actual [`crawl_core::CrawlEntity`]; content only decides what
//! a fresh player is made of.

use crawl_core::{Attack, EntityStats, ItemBlueprint};

use crate::attacks;
use crate::items;

/// Everything needed to spawn a player except the things only the session
/// knows (id, location, controller).
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSpec {
    pub name: String,
    pub stats: EntityStats,
    pub attacks: Vec<Attack>,
    pub held_items: Vec<ItemBlueprint>,
}

/// The standard starting loadout.
pub fn generate_player(name: impl Into<String>) -> PlayerSpec {
    PlayerSpec {
        name: name.into(),
        stats: EntityStats::new(55, 20, 15, 100, 10),
        attacks: vec![
            attacks::tackle(),
            attacks::overheat(),
            attacks::calm_mind(),
            attacks::growl(),
        ],
        held_items: vec![items::oran_berry()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_players_start_at_full_meters() {
        let spec = generate_player("Toaster");
        assert_eq!(spec.stats.hp.current, spec.stats.hp.max);
        assert_eq!(spec.stats.energy.current, spec.stats.energy.max);
        assert_eq!(spec.attacks.len(), 4);
    }
}
