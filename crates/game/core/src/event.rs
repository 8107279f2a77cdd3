//! Log events emitted during turn resolution and the sink they flow into.
//!
//! Events are the only feedback channel the engine has: every observable
//! change (and every observable non-change, like a blocked move) produces an
//! event, and the visibility propagator decides per entity whether the event
//! is delivered. Spatially scoped events carry the locations needed for that
//! test; floor-scoped announcements are delivered to everyone.

use crate::direction::Direction;
use crate::state::{EntityId, Location, StatKind};

/// Lightweight entity identity embedded in event payloads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRef {
    pub id: EntityId,
    pub name: String,
}

/// Something an entity could have observed this turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum LogEvent {
    /// A movement attempt. A blocked attempt keeps `start == end`, which is
    /// the only signal observers get that nothing happened.
    Move {
        entity: EntityRef,
        start: Location,
        end: Location,
    },

    /// An attack was launched (independent of whether anything was hit).
    Attack {
        entity: EntityRef,
        attack: String,
        location: Location,
        direction: Direction,
    },

    /// A stat changed by the given applied delta.
    Stat {
        entity: EntityRef,
        location: Location,
        stat: StatKind,
        change: i32,
    },

    /// The entity spent its turn doing nothing.
    Wait { entity: EntityRef, location: Location },

    /// Floor-scoped narration (item chatter, revival announcements).
    Message { text: String },

    /// The entity dropped to zero hp and left the floor.
    Defeat { entity: EntityRef, location: Location },

    /// An attack failed its accuracy roll against this entity.
    Miss { entity: EntityRef, location: Location },

    /// A qualifying entity reached the stairs; the floor is over.
    Stairs { entity: EntityRef },

    /// Delivered to each entity carried onto a freshly generated floor.
    Start {
        floor_number: u32,
        width: u32,
        height: u32,
        location: Location,
    },

    /// Turn resolution finished; clients may sync.
    Done,
}

/// Sink for the filtered event stream of one entity.
///
/// Owned by the session/transport layer: a remote client feed, a replay
/// buffer, or an AI driver. The engine only ever pushes.
pub trait Controller {
    fn push_event(&mut self, event: LogEvent);
}

/// Controller that drops everything, for entities nobody is watching.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardController;

impl Controller for DiscardController {
    fn push_event(&mut self, _event: LogEvent) {}
}
