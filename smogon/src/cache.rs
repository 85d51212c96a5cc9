//! Per-key memo of normalized fetch results

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Identifies one fetched result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub generation: u8,
    /// Species id
    pub species: String,
    /// Format as requested, before any seasonal normalization
    pub format: String,
}

impl CacheKey {
    pub fn new(generation: u8, species: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            generation,
            species: species.into(),
            format: format.into(),
        }
    }
}

/// Unbounded, append-only cache.
///
/// A populated key is never replaced or evicted: the first value stored for
/// a key is the one every later lookup sees.
#[derive(Debug)]
pub struct Cache<V> {
    entries: RwLock<HashMap<CacheKey, V>>,
}

impl<V: Clone> Cache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<V> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let hit = entries.get(key).cloned();
        if hit.is_some() {
            tracing::debug!(
                generation = key.generation,
                species = %key.species,
                format = %key.format,
                "Cache hit"
            );
        }
        hit
    }

    /// Store `value` unless the key is already populated; returns the cached value
    pub fn insert(&self, key: CacheKey, value: V) -> V {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.entry(key).or_insert(value).clone()
    }

    #[cfg(test)]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// Formats already cached for a species, sorted
    pub fn formats(&self, generation: u8, species: &str) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut formats: Vec<String> = entries
            .keys()
            .filter(|key| key.generation == generation && key.species == species)
            .map(|key| key.format.clone())
            .collect();
        formats.sort();
        formats
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> Default for Cache<V> {
    fn default() -> Self {
        Self::new()
    }
}
