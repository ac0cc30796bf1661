use crate::RuleSet;
use std::collections::HashMap;

/// The key for a cached action value.
///
/// This is the state, the action played on it, and the team playing it.
pub type CacheKey<R> = (
    <R as RuleSet>::State,
    <R as RuleSet>::Action,
    <R as RuleSet>::Team,
);

/// Cache usage stats
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// The # of cached values
    pub entries: usize,

    /// The # of lookups that found a value
    pub hits: u64,

    /// The # of lookups that did not find a value
    pub misses: u64,
}

/// A memo of action values.
///
/// Entries are never evicted, only cleared.
pub struct ActionValueCache<R>
where
    R: RuleSet,
{
    map: HashMap<CacheKey<R>, i8>,

    hits: u64,
    misses: u64,
}

impl<R> ActionValueCache<R>
where
    R: RuleSet,
{
    /// Make a new, empty [`ActionValueCache`].
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Make a new, empty [`ActionValueCache`] with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a value, recording a hit or a miss.
    pub fn get(&mut self, key: &CacheKey<R>) -> Option<i8> {
        let value = self.map.get(key).copied();
        match value {
            Some(_) => self.hits += 1,
            None => self.misses += 1,
        }
        value
    }

    /// Look up a value without recording anything.
    pub fn peek(&self, key: &CacheKey<R>) -> Option<i8> {
        self.map.get(key).copied()
    }

    /// Insert a value.
    pub fn insert(&mut self, key: CacheKey<R>, value: i8) {
        self.map.insert(key, value);
    }

    /// Gets the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Remove every entry and reset the counters.
    pub fn clear(&mut self) {
        self.map.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get usage stats.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.map.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl<R> Default for ActionValueCache<R>
where
    R: RuleSet,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for ActionValueCache<R>
where
    R: RuleSet,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionValueCache")
            .field("entries", &self.map.len())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
