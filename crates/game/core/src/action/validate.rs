//! Pure action legality checks.

use crate::action::Action;
use crate::direction::Direction;
use crate::state::{CrawlEntity, InProgressCrawl};

/// Whether `entity` may legally take `action` in the current state.
///
/// Pure and side-effect free. Attacks and item invocations are always legal
/// here; accuracy and resource handling are the executor's concern.
pub fn is_valid(state: &InProgressCrawl, entity: &CrawlEntity, action: &Action) -> bool {
    match action {
        Action::Wait => true,
        Action::Move { direction } => is_valid_move(state, entity, *direction),
        Action::Attack { .. } => true,
        Action::Item { .. } => true,
    }
}

/// Movement legality for a single step.
///
/// The destination must be in bounds, unoccupied, and not a wall. Diagonal
/// steps are additionally forbidden whenever either endpoint is a corridor
/// tile, which is what stops entities from cutting corners across walls.
pub fn is_valid_move(state: &InProgressCrawl, entity: &CrawlEntity, direction: Direction) -> bool {
    let map = &state.floor.map;
    let destination = entity.location.step(direction);

    if !map.contains(destination) {
        return false;
    }

    if state.entity_at(destination).is_some() {
        return false;
    }

    if map.tile_or_unknown(destination).is_wall() {
        return false;
    }

    if direction.is_diagonal() {
        let start_in_corridor = map.tile_or_unknown(entity.location).room.is_corridor();
        let end_in_corridor = map.tile_or_unknown(destination).room.is_corridor();
        if start_in_corridor || end_in_corridor {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Location;
    use crate::testkit;

    // 1 1 1 . .
    // 1 1 1 . .
    // . . . . .
    fn open_crawl() -> InProgressCrawl {
        testkit::crawl(
            testkit::map_from_rows(&["111..", "111..", "....."]),
            vec![testkit::entity(1, "mover", (1, 1)).build()],
        )
    }

    #[test]
    fn wait_is_always_valid() {
        let crawl = open_crawl();
        assert!(is_valid(&crawl, &crawl.entities[0], &Action::Wait));
    }

    #[test]
    fn orthogonal_moves_into_corridors_are_fine() {
        let crawl = open_crawl();
        let mover = &crawl.entities[0];
        // East from (1,1) lands in the room, two more steps would be corridor
        assert!(is_valid_move(&crawl, mover, Direction::East));
        assert!(is_valid_move(&crawl, mover, Direction::South));
    }

    #[test]
    fn diagonal_moves_touching_corridors_are_rejected() {
        let map = testkit::map_from_rows(&["111..", "111..", "....."]);
        // Mover on the room's south-east corner: all diagonal exits touch
        // corridor tiles.
        let crawl = testkit::crawl(
            map,
            vec![testkit::entity(1, "mover", (1, 2)).build()],
        );
        let mover = &crawl.entities[0];
        assert!(!is_valid_move(&crawl, mover, Direction::Southeast));
        assert!(!is_valid_move(&crawl, mover, Direction::Northeast));
        // Inside the room, diagonals are fine
        assert!(is_valid_move(&crawl, mover, Direction::Northwest));
    }

    #[test]
    fn diagonal_moves_out_of_corridors_are_rejected() {
        let crawl = testkit::crawl(
            testkit::map_from_rows(&["111..", "111..", "....."]),
            vec![testkit::entity(1, "mover", (2, 2)).build()],
        );
        let mover = &crawl.entities[0];
        for direction in Direction::ALL {
            if direction.is_diagonal() {
                assert!(
                    !is_valid_move(&crawl, mover, direction),
                    "diagonal {direction:?} out of a corridor must be rejected"
                );
            }
        }
    }

    #[test]
    fn walls_bounds_and_occupants_block_movement() {
        let crawl = testkit::crawl(
            testkit::map_from_rows(&["11#", "11.", "..."]),
            vec![
                testkit::entity(1, "mover", (0, 1)).build(),
                testkit::entity(2, "blocker", (1, 1)).build(),
            ],
        );
        let mover = &crawl.entities[0];
        assert!(!is_valid_move(&crawl, mover, Direction::East)); // wall
        assert!(!is_valid_move(&crawl, mover, Direction::North)); // out of bounds
        assert!(!is_valid_move(&crawl, mover, Direction::South)); // occupied
        assert!(is_valid_move(&crawl, mover, Direction::West));
        assert_eq!(mover.location, Location::new(0, 1));
    }
}
