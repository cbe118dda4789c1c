//! Bounded per-term cache of assembled section pools.
//!
//! Assembling a term's [`Section`] pool rescans the whole record array, so
//! callers serving repeated queries keep a [`TermCache`] next to their
//! records and go through [`TermCache::get_or_insert_with`]. The cache is
//! owned by the caller and sized at construction; when full, the oldest
//! inserted term is evicted first. Lookups do not refresh the eviction
//! order, which keeps the structure a plain map plus queue.

use std::collections::{HashMap, VecDeque};

use horaire_engine::Section;

/// A fixed-capacity map from term name to its section pool, evicting in
/// first-in-first-out order.
///
/// Term keys are compared case-insensitively; `"Automne2025"` and
/// `"automne2025"` address the same entry.
#[derive(Debug)]
pub struct TermCache {
    capacity: usize,
    entries: HashMap<String, Vec<Section>>,
    order: VecDeque<String>,
}

impl TermCache {
    /// Create a cache holding at most `capacity` terms. A capacity of zero
    /// is bumped to one so the cache can always hold the current term.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// The section pool for `term`, if cached.
    pub fn get(&self, term: &str) -> Option<&[Section]> {
        self.entries.get(&term.to_lowercase()).map(Vec::as_slice)
    }

    /// The section pool for `term`, building and caching it on a miss.
    ///
    /// `build` runs only when the term is absent; inserting into a full
    /// cache evicts the oldest term first.
    pub fn get_or_insert_with<F>(&mut self, term: &str, build: F) -> &[Section]
    where
        F: FnOnce() -> Vec<Section>,
    {
        let key = term.to_lowercase();
        if !self.entries.contains_key(&key) {
            if self.entries.len() == self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
            self.order.push_back(key.clone());
            self.entries.insert(key.clone(), build());
        }
        self.entries.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Drop one term's entry. Returns whether it was present.
    ///
    /// Callers invalidate after the underlying records change, e.g. when a
    /// catalog file is reloaded.
    pub fn invalidate(&mut self, term: &str) -> bool {
        let key = term.to_lowercase();
        let removed = self.entries.remove(&key).is_some();
        if removed {
            self.order.retain(|k| k != &key);
        }
        removed
    }

    /// Drop every entry, keeping the configured capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of cached terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The maximum number of terms this cache holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
