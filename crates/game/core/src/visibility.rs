//! Line-of-sight rules and event propagation.
//!
//! Two locations see each other when they share a room or sit within a short
//! Chebyshev radius of one another; corridors therefore only grant the short
//! radius. Events are delivered per entity through this test, so partial
//! information falls out of the same rule everywhere.

use crate::config::CrawlConfig;
use crate::event::LogEvent;
use crate::state::{CrawlEntity, FloorMap, Location};

/// Whether an observer at `from` can see `to` on the given floor.
pub fn is_visible(map: &FloorMap, from: Location, to: Location) -> bool {
    if map.same_room(from, to) {
        return true;
    }
    from.distance(to) <= CrawlConfig::SIGHT_RANGE
}

/// Delivers `event` to every entity whose visibility test passes.
///
/// Spatially scoped events test their single location; moves pass if either
/// endpoint is visible, so an observer that only sees the destination still
/// learns of the move. Floor-scoped events (messages, stairs, floor start,
/// turn done) are delivered to everyone.
pub fn propagate_log_event(map: &FloorMap, entities: &mut [CrawlEntity], event: &LogEvent) {
    for entity in entities.iter_mut() {
        let observer = entity.location;
        let delivered = match event {
            LogEvent::Wait { location, .. }
            | LogEvent::Attack { location, .. }
            | LogEvent::Stat { location, .. }
            | LogEvent::Defeat { location, .. }
            | LogEvent::Miss { location, .. } => is_visible(map, observer, *location),
            LogEvent::Move { start, end, .. } => {
                is_visible(map, observer, *start) || is_visible(map, observer, *end)
            }
            LogEvent::Message { .. }
            | LogEvent::Stairs { .. }
            | LogEvent::Start { .. }
            | LogEvent::Done => true,
        };
        if delivered {
            entity.push_event(event.clone());
        }
    }
}
