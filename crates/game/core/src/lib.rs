//! Deterministic turn resolution for a tile-based dungeon crawl.
//!
//! `crawl-core` owns the canonical rules: action validation, the execute
//! pipeline (movement, combat, item dispatch), target resolution, the damage
//! formulas, visibility-filtered event propagation, fog-of-war bookkeeping,
//! and floor advancement. It is synchronous and single-writer by contract;
//! everything external — floor generation, randomness, event delivery — comes
//! in through the traits in [`env`] and [`event`].

pub mod action;
pub mod combat;
pub mod config;
pub mod direction;
pub mod engine;
pub mod env;
pub mod event;
pub mod fog;
pub mod item;
pub mod state;
pub mod visibility;

#[cfg(test)]
pub(crate) mod testkit;

pub use action::{Action, ItemAction, TargetSelector, get_targets, is_valid, is_valid_move};
pub use combat::{Accuracy, Attack, OnHitEffect, compute_damage};
pub use config::CrawlConfig;
pub use direction::{Direction, DirectionError};
pub use engine::{ExecuteError, execute};
pub use env::{CrawlEnv, EnvError, FloorGenerator, GenerateError, PcgRng, RngOracle, compute_seed};
pub use event::{Controller, DiscardController, EntityRef, LogEvent};
pub use fog::{FogMapMismatch, update_entity_map};
pub use item::{
    EquipEffect, HookBehavior, Item, ItemBlueprint, ItemEffect, ItemHook, ItemVerb, ThrowRule,
};
pub use state::{
    Alignment, BoostedStat, ConcludedCrawl, CrawlEntity, CrawlState, CrawlSummary, Dungeon,
    DungeonTile, EntityId, EntityStats, Floor, FloorMap, InProgressCrawl, Location, MapError,
    ResourceMeter, RoomId, StatKind, TileKind, are_aligned,
};
pub use visibility::{is_visible, propagate_log_event};
