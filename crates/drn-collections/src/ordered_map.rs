//! Separate-chaining hash table with automatic grow/shrink.
//!
//! # Data layout
//!
//! `buckets[i]` is a `Vec<(K, V)>` holding every entry whose key hashes to
//! bucket `i`. Collisions are resolved by linear scan within the bucket —
//! fine at the load factors this table maintains (≤ 0.70).
//!
//! # Resize policy
//!
//! Starts at capacity 8. Immediately after any insert that drives the load
//! factor α = size / capacity above 0.70, capacity doubles. Immediately
//! after any delete that leaves α below 0.20, capacity halves — but never
//! below the floor of 8. Every resize rehashes every live entry into the new
//! bucket array; iteration order is therefore unspecified and may differ
//! across calls, including calls that don't mutate the table in between.
//!
//! One `OrderedMap<K, V>` is instantiated per concrete key type used in the
//! workspace (string ids, vertex ids, ...) rather than shared through a
//! single runtime-typed table — see the crate's heterogeneous-storage design
//! note.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use drn_core::CoreError;

const INITIAL_CAPACITY: usize = 8;
const GROW_LOAD_FACTOR: f64 = 0.70;
const SHRINK_LOAD_FACTOR: f64 = 0.20;

/// A generic separate-chaining hash table.
pub struct OrderedMap<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    size: usize,
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            buckets: (0..INITIAL_CAPACITY).map(|_| Vec::new()).collect(),
            size: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.capacity()
    }

    /// Insert `key → value`, overwriting any previous value for `key`.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];
        if let Some(slot) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        bucket.push((key, value));
        self.size += 1;

        if self.load_factor() > GROW_LOAD_FACTOR {
            self.resize(self.capacity() * 2);
        }
        None
    }

    pub fn contains(&self, key: &K) -> bool {
        let idx = self.bucket_index(key);
        self.buckets[idx].iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &K) -> Result<&V, CoreError> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or(CoreError::KeyNotFound)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, CoreError> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or(CoreError::KeyNotFound)
    }

    /// Remove `key`, returning its value. Fails with `KeyNotFound` if absent.
    pub fn delete(&mut self, key: &K) -> Result<V, CoreError> {
        let idx = self.bucket_index(key);
        let bucket = &mut self.buckets[idx];
        let pos = bucket
            .iter()
            .position(|(k, _)| k == key)
            .ok_or(CoreError::KeyNotFound)?;
        let (_, v) = bucket.swap_remove(pos);
        self.size -= 1;

        if self.capacity() > INITIAL_CAPACITY && self.load_factor() < SHRINK_LOAD_FACTOR {
            self.resize((self.capacity() / 2).max(INITIAL_CAPACITY));
        }
        Ok(v)
    }

    fn resize(&mut self, new_capacity: usize) {
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            size = self.size,
            "rehashing ordered map"
        );
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| Vec::new()).collect(),
        );
        for (k, v) in old_buckets.into_iter().flatten() {
            let idx = self.bucket_index(&k);
            self.buckets[idx].push((k, v));
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.buckets.iter().flat_map(|b| b.iter().map(|(k, _)| k))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.buckets.iter().flat_map(|b| b.iter().map(|(_, v)| v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|b| b.iter().map(|(k, v)| (k, v)))
    }

    /// Insert every entry of `other` into `self`, overwriting on key clash.
    pub fn merge_from(&mut self, other: Self)
    where
        V: Clone,
    {
        for bucket in other.buckets {
            for (k, v) in bucket {
                self.insert(k, v);
            }
        }
    }
}

impl<K: Hash + Eq + Clone, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
