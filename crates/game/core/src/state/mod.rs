//! Authoritative crawl state.
//!
//! A [`CrawlState`] is created once per floor entry and replaced wholesale on
//! floor advancement or conclusion. Everything inside it is mutated
//! exclusively through the engine's execute pipeline.

mod entity;
mod floor;
mod stats;

pub use entity::{Alignment, CrawlEntity, EntityId, are_aligned};
pub use floor::{DungeonTile, Floor, FloorMap, Location, MapError, RoomId, TileKind};
pub use stats::{BoostedStat, EntityStats, ResourceMeter, StatKind};

use crate::event::LogEvent;
use crate::visibility;

/// Static descriptor of the dungeon being crawled.
///
/// Consumed by the floor generator; the engine itself only reads the name and
/// the depth at which the crawl concludes successfully.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dungeon {
    pub name: String,
    /// Total floor count; clearing the last one wins the crawl.
    pub floors: u32,
}

/// Crawl lifecycle: live floor state or a terminal summary.
///
/// Once concluded, a crawl is never mutated again; the engine refuses further
/// actions against it.
#[derive(Debug)]
pub enum CrawlState {
    InProgress(InProgressCrawl),
    Concluded(ConcludedCrawl),
}

impl CrawlState {
    pub fn is_concluded(&self) -> bool {
        matches!(self, CrawlState::Concluded(_))
    }

    pub fn as_in_progress(&self) -> Option<&InProgressCrawl> {
        match self {
            CrawlState::InProgress(crawl) => Some(crawl),
            CrawlState::Concluded(_) => None,
        }
    }

    pub fn as_concluded(&self) -> Option<&ConcludedCrawl> {
        match self {
            CrawlState::InProgress(_) => None,
            CrawlState::Concluded(concluded) => Some(concluded),
        }
    }
}

/// Live state of one floor.
#[derive(Debug)]
pub struct InProgressCrawl {
    pub dungeon: Dungeon,
    pub floor: Floor,
    pub entities: Vec<CrawlEntity>,
    /// Base seed for deterministic accuracy rolls; fixed at crawl start.
    pub seed: u64,
    /// Monotonic action counter, mixed into roll seeds so repeated attacks
    /// do not repeat outcomes.
    pub nonce: u64,
}

impl InProgressCrawl {
    pub fn entity(&self, id: EntityId) -> Option<&CrawlEntity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut CrawlEntity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    pub fn entity_at(&self, location: Location) -> Option<&CrawlEntity> {
        self.entities
            .iter()
            .find(|entity| entity.location == location)
    }

    /// Delivers an event to every entity that could have observed it.
    pub fn propagate(&mut self, event: LogEvent) {
        visibility::propagate_log_event(&self.floor.map, &mut self.entities, &event);
    }
}

/// Terminal crawl outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConcludedCrawl {
    pub success: bool,
    pub summary: CrawlSummary,
}

/// What the session layer reports once a crawl ends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrawlSummary {
    pub dungeon: String,
    pub floors_cleared: u32,
}
