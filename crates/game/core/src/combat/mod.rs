//! Attack data model and damage calculation.

mod damage;

pub use damage::compute_damage;

use crate::action::TargetSelector;
use crate::state::StatKind;

/// How an attack's hit chance resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accuracy {
    /// Never rolls; always lands.
    Always,
    /// Lands on a d100 roll of at most this value.
    Percent(u8),
}

/// Secondary effect applied to each target an attack lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnHitEffect {
    /// Shifts the target's stage for the named stat (or its meter, for hp
    /// and energy).
    StatChange { stat: StatKind, amount: i32 },
}

/// One named attack from the catalog.
///
/// `power` only gates whether the damage formula runs at all; a powerless
/// attack is a pure status move carried entirely by its `on_hit` effects.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    pub name: String,
    pub power: Option<u32>,
    pub accuracy: Accuracy,
    pub target: TargetSelector,
    pub on_hit: Vec<OnHitEffect>,
}
