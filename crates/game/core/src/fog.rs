//! Fog-of-war: per-entity partial knowledge of the floor.
//!
//! Revelation is monotonic. A tile, once copied into an entity's private map,
//! is never hidden again; the updater only ever widens what is known.

use crate::config::CrawlConfig;
use crate::direction::Direction;
use crate::state::{CrawlEntity, FloorMap, Location};

/// Dimension disagreement between an entity's fog map and the floor.
///
/// This cannot happen through normal play (fog maps are created alongside the
/// floor) and is surfaced as a programming error rather than repaired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "fog map is {fog_width}x{fog_height} but the floor is {floor_width}x{floor_height}"
)]
pub struct FogMapMismatch {
    pub floor_width: u32,
    pub floor_height: u32,
    pub fog_width: u32,
    pub fog_height: u32,
}

/// Refreshes one entity's private map from the authoritative floor.
///
/// A tile is revealed when:
/// - the entity stands in a room and the tile is in that room, or touches
///   that room as an 8-directional neighbor (walls fringing the room), or
/// - the tile falls inside the 5x5 box centered on the entity.
pub fn update_entity_map(floor: &FloorMap, entity: &mut CrawlEntity) -> Result<(), FogMapMismatch> {
    if !floor.same_dimensions(&entity.map) {
        return Err(FogMapMismatch {
            floor_width: floor.width(),
            floor_height: floor.height(),
            fog_width: entity.map.width(),
            fog_height: entity.map.height(),
        });
    }

    let standing_in_room = floor.in_room(entity.location);

    for row in 0..floor.height() as i32 {
        for col in 0..floor.width() as i32 {
            let tile = Location::new(row, col);

            if standing_in_room && sees_into_room(floor, entity.location, tile) {
                entity.map.set(tile, floor.tile_or_unknown(tile));
                continue;
            }

            let dr = (entity.location.row - row).abs();
            let dc = (entity.location.col - col).abs();
            if dr <= CrawlConfig::FOG_REVEAL_RADIUS && dc <= CrawlConfig::FOG_REVEAL_RADIUS {
                entity.map.set(tile, floor.tile_or_unknown(tile));
            }
        }
    }

    Ok(())
}

/// Room-based revelation: the tile itself, or any of its 8 neighbors, shares
/// the observer's room.
fn sees_into_room(floor: &FloorMap, observer: Location, tile: Location) -> bool {
    if floor.same_room(observer, tile) {
        return true;
    }
    Direction::ALL.iter().any(|direction| {
        let neighbor = tile.step(*direction);
        floor.contains(neighbor) && floor.same_room(observer, neighbor)
    })
}
