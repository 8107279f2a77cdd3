//! Crawl entities: identity, stat block, fog map, and the event sink.

use std::fmt;

use crate::combat::Attack;
use crate::event::{Controller, EntityRef, LogEvent};
use crate::item::{EquipEffect, Item};
use crate::state::floor::{FloorMap, Location};
use crate::state::stats::{EntityStats, StatKind};

/// Unique identifier for an entity, stable for the entity's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Team tag. Entities without one fight for themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment(pub u32);

/// One acting entity on the current floor.
///
/// Mutated every turn by the executor and destroyed by the death filter the
/// moment hp reaches zero. The `map` field is the entity's private fog-of-war
/// copy of the floor; `controller` is the externally owned sink its filtered
/// event stream is pushed into.
pub struct CrawlEntity {
    pub id: EntityId,
    pub name: String,
    pub location: Location,
    pub stats: EntityStats,
    pub alignment: Option<Alignment>,
    /// Whether this entity counts toward clearing the floor and is carried
    /// to the next one.
    pub advances: bool,
    pub map: FloorMap,
    pub attacks: Vec<Attack>,
    pub held_items: Vec<Item>,
    pub controller: Box<dyn Controller>,
}

impl CrawlEntity {
    pub fn entity_ref(&self) -> EntityRef {
        EntityRef {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.stats.hp.is_empty()
    }

    pub fn push_event(&mut self, event: LogEvent) {
        self.controller.push_event(event);
    }

    /// Total stage offset contributed by held equipment for one stat.
    pub fn equip_modifier_delta(&self, stat: StatKind) -> i32 {
        self.held_items
            .iter()
            .filter_map(|item| item.equip)
            .map(|effect| match effect {
                EquipEffect::ModifierDelta {
                    stat: affected,
                    delta,
                } if affected == stat => delta,
                EquipEffect::ModifierDelta { .. } => 0,
            })
            .sum()
    }

    /// Effective attack value after stages and the equip fold.
    pub fn modified_attack(&self) -> f64 {
        self.stats
            .attack
            .modified_with(self.equip_modifier_delta(StatKind::Attack))
    }

    /// Effective defense value after stages and the equip fold.
    pub fn modified_defense(&self) -> f64 {
        self.stats
            .defense
            .modified_with(self.equip_modifier_delta(StatKind::Defense))
    }
}

impl fmt::Debug for CrawlEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrawlEntity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("location", &self.location)
            .field("stats", &self.stats)
            .field("alignment", &self.alignment)
            .field("advances", &self.advances)
            .finish_non_exhaustive()
    }
}

/// True if both entities carry the same team tag.
///
/// Two unaligned entities are NOT aligned with each other; this differs from
/// the raw tag equality the target selectors use, where untagged entities
/// group together.
pub fn are_aligned(a: &CrawlEntity, b: &CrawlEntity) -> bool {
    matches!((a.alignment, b.alignment), (Some(x), Some(y)) if x == y)
}
