//! Actions an entity can submit for its turn.
//!
//! - `validate`: pure legality checks (the only action with real rules is
//!   movement)
//! - `targeting`: declarative target selectors and their resolver
//!
//! Execution itself lives in [`crate::engine`].

mod targeting;
mod validate;

pub use targeting::{TargetSelector, get_targets};
pub use validate::{is_valid, is_valid_move};

use crate::combat::Attack;
use crate::direction::Direction;
use crate::item::ItemVerb;

/// One submitted turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Do nothing this turn.
    Wait,
    /// Step one tile in the given direction.
    Move { direction: Direction },
    /// Launch an attack facing the given direction.
    Attack { attack: Attack, direction: Direction },
    /// Invoke a held item. Wired into the executor as a dispatch point but
    /// inert in this core: the state passes through unchanged.
    Item { action: ItemAction },
}

/// Which held item to invoke, and how.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAction {
    /// Index into the entity's held items.
    pub slot: usize,
    pub verb: ItemVerb,
}

impl Action {
    /// Returns the snake_case name of the action kind.
    ///
    /// Used for logging and serialization keys.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Wait => "wait",
            Action::Move { .. } => "move",
            Action::Attack { .. } => "attack",
            Action::Item { .. } => "item",
        }
    }
}
