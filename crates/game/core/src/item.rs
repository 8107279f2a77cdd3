//! Items: shared blueprints, mutable instances, and the capability registry.
//!
//! A blueprint is read-only template data from the catalog. An instance is
//! entity-owned and free to diverge: consuming a reviver seed, for example,
//! atomically replaces the instance with the plain-seed blueprint via
//! [`Item::transform_into`].
//!
//! Behavior hangs off capability tags: each blueprint declares which hooks it
//! implements, and the executor looks the hook up by tag and interprets the
//! declarative effect program behind it. There is no open-ended callback
//! surface.

use std::collections::BTreeMap;

use crate::state::StatKind;

/// Player-facing verbs an item responds to, mapped to trigger words in the
/// blueprint's `actions` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ItemVerb {
    Use,
    Drop,
    Throw,
}

/// Capability tags an item can implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemHook {
    /// The item was consumed or activated by its holder.
    Use,
    /// A thrown instance of the item struck an entity.
    Collide,
    /// The holder dropped to zero hp this turn.
    EntityDefeat,
    /// Resolve where a throw in a given direction lands.
    ThrowTarget,
}

/// One step of a hook's declarative effect program.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Heal up to the given amount, clamped by the hp ceiling.
    RestoreHp(u32),
    /// Refill up to the given amount of energy.
    RestoreEnergy(u32),
    /// Direct damage, bypassing the combat formula (thrown items).
    InflictDamage(u32),
    /// Reset hp to its ceiling.
    ReviveFull,
    /// Emit a floor-scoped message; `{name}` expands to the affected entity.
    Announce(String),
    /// Atomically become a different item.
    TransformInto(Box<ItemBlueprint>),
}

/// How far a thrown instance of the item travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThrowRule {
    /// Flies in a straight line until it hits a wall or an entity.
    Straight,
    /// Lands at most this many tiles away (stops early at walls).
    Fixed(u32),
}

/// Registered behavior behind one capability tag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HookBehavior {
    /// Effect program interpreted by the executor.
    Effects(Vec<ItemEffect>),
    /// Throw-targeting rule (only meaningful under [`ItemHook::ThrowTarget`]).
    Throw(ThrowRule),
}

/// Passive stat override granted while the item is held.
///
/// Equipping never intercepts stat access; the effective stat is computed by
/// folding these deltas over the base at read time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipEffect {
    ModifierDelta { stat: StatKind, delta: i32 },
}

/// Read-only item template from the catalog.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBlueprint {
    pub name: String,
    pub description: String,
    pub actions: BTreeMap<ItemVerb, Vec<String>>,
    pub handlers: BTreeMap<ItemHook, HookBehavior>,
    pub equip: Option<EquipEffect>,
}

impl ItemBlueprint {
    /// Creates an entity-owned instance of this blueprint.
    pub fn instantiate(&self) -> Item {
        Item {
            name: self.name.clone(),
            description: self.description.clone(),
            actions: self.actions.clone(),
            handlers: self.handlers.clone(),
            equip: self.equip,
        }
    }
}

/// Entity-owned item state.
///
/// Starts as a copy of a blueprint and mutates independently afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub description: String,
    pub actions: BTreeMap<ItemVerb, Vec<String>>,
    pub handlers: BTreeMap<ItemHook, HookBehavior>,
    pub equip: Option<EquipEffect>,
}

impl Item {
    /// Atomic replacement of this instance's identity and behavior.
    pub fn transform_into(&mut self, blueprint: &ItemBlueprint) {
        *self = blueprint.instantiate();
    }

    /// Looks up the registered behavior for a capability tag.
    pub fn behavior(&self, hook: ItemHook) -> Option<&HookBehavior> {
        self.handlers.get(&hook)
    }

    /// Effect program for a capability tag, if one is registered.
    pub fn effects(&self, hook: ItemHook) -> Option<&[ItemEffect]> {
        match self.handlers.get(&hook) {
            Some(HookBehavior::Effects(effects)) => Some(effects),
            _ => None,
        }
    }

    /// Throw rule, if the item is throwable.
    pub fn throw_rule(&self) -> Option<ThrowRule> {
        match self.handlers.get(&ItemHook::ThrowTarget) {
            Some(HookBehavior::Throw(rule)) => Some(*rule),
            _ => None,
        }
    }
}
