//! Declarative target selectors and their resolver.

use crate::config::CrawlConfig;
use crate::direction::Direction;
use crate::state::{CrawlEntity, EntityId, InProgressCrawl};

/// Which entities an attack affects, independent of its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetSelector {
    /// The attacker itself.
    User,
    /// Everyone sharing the attacker's team tag.
    Team { include_self: bool },
    /// Whoever stands one step away in the facing direction.
    ///
    /// `cuts_corners` is catalog data consumed by client-side targeting
    /// previews; resolution ignores it.
    Front { cuts_corners: bool },
    /// Everyone in the attacker's room, with a short-range fallback when the
    /// attacker stands in a corridor.
    Room {
        include_self: bool,
        include_allies: bool,
    },
}

/// Resolves an attack's target set.
///
/// Pure; the returned ids follow entity-iteration order, which is the order
/// effects are applied in. Alignment comparisons here are raw tag equality,
/// so two untagged entities count as teammates for filtering purposes.
///
/// The `Room` selector is deliberately asymmetric: launched from inside a
/// room it returns the whole room unfiltered (allies and attacker included),
/// while the corridor fallback takes everything within Chebyshev distance 2
/// and then applies the alignment filter.
pub fn get_targets(
    state: &InProgressCrawl,
    attacker: &CrawlEntity,
    direction: Direction,
    selector: &TargetSelector,
) -> Vec<EntityId> {
    match *selector {
        TargetSelector::User => vec![attacker.id],

        TargetSelector::Team { include_self } => state
            .entities
            .iter()
            .filter(|entity| {
                entity.alignment == attacker.alignment
                    && (entity.id != attacker.id || include_self)
            })
            .map(|entity| entity.id)
            .collect(),

        TargetSelector::Front { .. } => {
            let target_location = attacker.location.step(direction);
            state
                .entities
                .iter()
                .filter(|entity| entity.location == target_location)
                .map(|entity| entity.id)
                .collect()
        }

        TargetSelector::Room {
            include_self,
            include_allies,
        } => {
            let map = &state.floor.map;
            let room = map.tile_or_unknown(attacker.location).room;

            if room.is_room() {
                return state
                    .entities
                    .iter()
                    .filter(|entity| map.same_room(attacker.location, entity.location))
                    .map(|entity| entity.id)
                    .collect();
            }

            state
                .entities
                .iter()
                .filter(|entity| {
                    attacker.location.distance(entity.location)
                        <= CrawlConfig::CORRIDOR_TARGET_RANGE
                })
                .filter(|entity| {
                    entity.alignment != attacker.alignment
                        || (include_allies && entity.id != attacker.id)
                        || (include_self && entity.id == attacker.id)
                })
                .map(|entity| entity.id)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Alignment;
    use crate::testkit;

    const ALLY: Alignment = Alignment(1);
    const ENEMY: Alignment = Alignment(2);

    // 1 1 1 1 1
    // 1 1 1 1 1
    // . . . . .
    // 2 2 2 2 2
    fn arena() -> InProgressCrawl {
        testkit::crawl(
            testkit::map_from_rows(&["11111", "11111", ".....", "22222"]),
            vec![
                testkit::entity(1, "attacker", (1, 1)).alignment(ALLY).build(),
                testkit::entity(2, "friend", (0, 4)).alignment(ALLY).build(),
                testkit::entity(3, "foe", (0, 1)).alignment(ENEMY).build(),
                testkit::entity(4, "far-foe", (3, 2)).alignment(ENEMY).build(),
            ],
        )
    }

    fn ids(targets: Vec<EntityId>) -> Vec<u32> {
        targets.into_iter().map(|id| id.0).collect()
    }

    #[test]
    fn user_selector_hits_only_the_attacker() {
        let crawl = arena();
        let targets = get_targets(
            &crawl,
            &crawl.entities[0],
            Direction::North,
            &TargetSelector::User,
        );
        assert_eq!(ids(targets), vec![1]);
    }

    #[test]
    fn team_selector_respects_include_self() {
        let crawl = arena();
        let without = get_targets(
            &crawl,
            &crawl.entities[0],
            Direction::North,
            &TargetSelector::Team {
                include_self: false,
            },
        );
        assert_eq!(ids(without), vec![2]);

        let with = get_targets(
            &crawl,
            &crawl.entities[0],
            Direction::North,
            &TargetSelector::Team { include_self: true },
        );
        assert_eq!(ids(with), vec![1, 2]);
    }

    #[test]
    fn front_selector_is_exactly_one_step() {
        let crawl = arena();
        // North of (1,1) is (0,1): the foe. Neither (0,0) nor any farther
        // tile qualifies.
        let targets = get_targets(
            &crawl,
            &crawl.entities[0],
            Direction::North,
            &TargetSelector::Front { cuts_corners: false },
        );
        assert_eq!(ids(targets), vec![3]);

        let empty = get_targets(
            &crawl,
            &crawl.entities[0],
            Direction::West,
            &TargetSelector::Front { cuts_corners: false },
        );
        assert!(empty.is_empty());
    }

    #[test]
    fn room_selector_from_a_room_returns_unfiltered_membership() {
        let crawl = arena();
        // Attacker, friend, and foe all share room 1; the asymmetry means the
        // attacker and its ally are swept up regardless of flags.
        let targets = get_targets(
            &crawl,
            &crawl.entities[0],
            Direction::North,
            &TargetSelector::Room {
                include_self: false,
                include_allies: false,
            },
        );
        assert_eq!(ids(targets), vec![1, 2, 3]);
    }

    #[test]
    fn room_selector_from_a_corridor_cuts_by_distance_then_alignment() {
        let crawl = testkit::crawl(
            testkit::map_from_rows(&["11111", "11111", ".....", "22222"]),
            vec![
                testkit::entity(1, "attacker", (2, 2)).alignment(ALLY).build(),
                testkit::entity(2, "close-friend", (2, 3)).alignment(ALLY).build(),
                testkit::entity(3, "close-foe", (3, 2)).alignment(ENEMY).build(),
                testkit::entity(4, "far-foe", (2, 0)).alignment(ENEMY).build(),
            ],
        );
        let targets = get_targets(
            &crawl,
            &crawl.entities[0],
            Direction::North,
            &TargetSelector::Room {
                include_self: false,
                include_allies: false,
            },
        );
        // Both foes sit within Chebyshev distance 2; the friend survives the
        // distance cut but falls to the alignment filter, and the attacker
        // needs include_self.
        assert_eq!(ids(targets), vec![3, 4]);
    }

    #[test]
    fn corridor_fallback_include_flags() {
        let crawl = testkit::crawl(
            testkit::map_from_rows(&["11111", "11111", ".....", "22222"]),
            vec![
                testkit::entity(1, "attacker", (2, 2)).alignment(ALLY).build(),
                testkit::entity(2, "close-friend", (2, 3)).alignment(ALLY).build(),
            ],
        );
        let targets = get_targets(
            &crawl,
            &crawl.entities[0],
            Direction::North,
            &TargetSelector::Room {
                include_self: true,
                include_allies: true,
            },
        );
        assert_eq!(ids(targets), vec![1, 2]);
    }

    #[test]
    fn untagged_entities_group_together_in_selectors() {
        let crawl = testkit::crawl(
            testkit::map_from_rows(&["11111", "11111", ".....", "22222"]),
            vec![
                testkit::entity(1, "loner", (2, 2)).build(),
                testkit::entity(2, "other-loner", (2, 3)).build(),
            ],
        );
        // Raw tag equality: two untagged entities are "teammates", so the
        // corridor fallback filters the other loner out without
        // include_allies.
        let targets = get_targets(
            &crawl,
            &crawl.entities[0],
            Direction::North,
            &TargetSelector::Room {
                include_self: false,
                include_allies: false,
            },
        );
        assert!(targets.is_empty());
    }
}
