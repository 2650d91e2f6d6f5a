//! Capacity-bounded ordered map backed by a sorted vector.
//!
//! Entries are kept sorted ascending by key, with unique keys. The capacity
//! is fixed at construction: inserting into a full map is rejected rather
//! than evicting, so eviction stays an explicit caller decision.

use alloc::vec::Vec;

/// Ordered associative container with a fixed maximum element count.
#[derive(Debug, Clone)]
pub struct SortedVecMap<K, V> {
    entries: Vec<(K, V)>,
    capacity: usize,
}

impl<K: Ord, V> SortedVecMap<K, V> {
    /// Create an empty map that holds at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "capacity must be positive");
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a key-value pair.
    ///
    /// Returns false and leaves the map unchanged when the map is full or
    /// the key is already present. Insert semantics, never upsert.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.is_full() {
            return false;
        }
        match self.index_of(&key) {
            Ok(_) => false,
            Err(at) => {
                self.entries.insert(at, (key, value));
                true
            }
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index_of(key).ok().map(|at| &self.entries[at].1)
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.index_of(key).is_ok()
    }

    /// Remove an entry by key, returning its value.
    ///
    /// Absence is a normal outcome, reported as `None`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.index_of(key) {
            Ok(at) => Some(self.entries.remove(at).1),
            Err(_) => None,
        }
    }

    /// Entry with the minimum key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    /// Entry with the maximum key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(k, v)| (k, v))
    }

    /// Newest entry whose key is less than or equal to `key`.
    pub fn last_at_or_before(&self, key: &K) -> Option<(&K, &V)> {
        let at = self.entries.partition_point(|(k, _)| k <= key);
        if at == 0 {
            return None;
        }
        self.entries.get(at - 1).map(|(k, v)| (k, v))
    }

    /// Oldest entry whose key is greater than or equal to `key`.
    pub fn first_at_or_after(&self, key: &K) -> Option<(&K, &V)> {
        let at = self.entries.partition_point(|(k, _)| k < key);
        self.entries.get(at).map(|(k, v)| (k, v))
    }

    /// Iterate entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Remove all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn index_of(&self, key: &K) -> Result<usize, usize> {
        self.entries.binary_search_by(|(k, _)| k.cmp(key))
    }
}
