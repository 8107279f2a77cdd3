//! Static game content consumed read-only by the engine's callers.
//!
//! This crate houses the attack catalog, the item blueprints, and the default
//! player loadout, plus RON loaders for overriding the attack catalog from
//! data files. Content never appears in crawl state directly: blueprints are
//! instantiated into entity-owned values at spawn time.

pub mod attacks;
pub mod items;
pub mod player;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use player::{PlayerSpec, generate_player};

#[cfg(feature = "loaders")]
pub use loaders::AttackRegistry;
