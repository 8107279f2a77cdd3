//! Attack catalog loader.

use std::collections::HashMap;

use anyhow::Context;
use crawl_core::Attack;

use super::LoadResult;

/// Registry of attacks keyed by name.
///
/// Loads the embedded RON catalog by default; deployments can layer extra
/// catalogs on top with [`AttackRegistry::merge_ron_str`].
#[derive(Debug, Clone, Default)]
pub struct AttackRegistry {
    attacks: HashMap<String, Attack>,
}

impl AttackRegistry {
    /// Loads the embedded catalog.
    pub fn load() -> LoadResult<Self> {
        let mut registry = Self::default();
        registry
            .merge_ron_str(include_str!("../../data/attacks.ron"))
            .context("failed to parse embedded attacks.ron")?;
        Ok(registry)
    }

    /// Parses a RON attack list and inserts every entry, replacing attacks
    /// that share a name.
    pub fn merge_ron_str(&mut self, source: &str) -> LoadResult<()> {
        let attacks: Vec<Attack> = ron::from_str(source)?;
        for attack in attacks {
            self.attacks.insert(attack.name.clone(), attack);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Attack> {
        self.attacks.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attacks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}
