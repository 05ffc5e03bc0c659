// File: src/cache.rs
//! Memo tables for the namers. Caching never changes a result; it only
//! saves recomputing names that were already built.

use crate::core::types::{DigitGroup, ZillionIndex};
use crate::core::{units, zillion};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Backing store for one memo table.
pub trait CacheStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn insert(&self, key: K, value: V);
    fn len(&self) -> usize;
    /// Every stored entry, in no particular order.
    fn entries(&self) -> Vec<(K, V)>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A `HashMap` behind a read-write lock. Grows monotonically.
pub struct InMemoryStore<K, V> {
    map: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self { map: RwLock::new(HashMap::new()) }
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CacheStore<K, V> for InMemoryStore<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        self.map.read().get(key).cloned()
    }

    fn insert(&self, key: K, value: V) {
        self.map.write().insert(key, value);
    }

    fn len(&self) -> usize {
        self.map.read().len()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.map.read().iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// A store that remembers nothing; every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStore;

impl<K, V> CacheStore<K, V> for DisabledStore {
    fn get(&self, _key: &K) -> Option<V> {
        None
    }

    fn insert(&self, _key: K, _value: V) {}

    fn len(&self) -> usize {
        0
    }

    fn entries(&self) -> Vec<(K, V)> {
        Vec::new()
    }
}

/// Key of the full-name table: the zero-stripped digits and the separator.
pub type NameKey = (String, String);

pub type Store<K> = Arc<dyn CacheStore<K, String>>;

/// The four memo tables used by [`crate::NumberNamer`].
#[derive(Clone)]
pub struct MemoCache {
    pub groups: Store<DigitGroup>,
    pub prefixes: Store<u16>,
    pub suffixes: Store<ZillionIndex>,
    pub names: Store<NameKey>,
}

impl MemoCache {
    pub fn in_memory() -> Self {
        Self {
            groups: Arc::new(InMemoryStore::new()),
            prefixes: Arc::new(InMemoryStore::new()),
            suffixes: Arc::new(InMemoryStore::new()),
            names: Arc::new(InMemoryStore::new()),
        }
    }

    pub fn disabled() -> Self {
        Self {
            groups: Arc::new(DisabledStore),
            prefixes: Arc::new(DisabledStore),
            suffixes: Arc::new(DisabledStore),
            names: Arc::new(DisabledStore),
        }
    }

    /// Total number of memoized entries across all tables.
    pub fn len(&self) -> usize {
        self.groups.len() + self.prefixes.len() + self.suffixes.len() + self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            format: SNAPSHOT_FORMAT.to_string(),
            groups: self.groups.entries(),
            prefixes: self.prefixes.entries(),
            suffixes: self.suffixes.entries(),
            names: self.names.entries(),
        }
    }

    /// Loads a snapshot into the tables. Entries already present are overwritten.
    pub fn restore(&self, snapshot: CacheSnapshot) {
        for (k, v) in snapshot.groups {
            self.groups.insert(k, v);
        }
        for (k, v) in snapshot.prefixes {
            self.prefixes.insert(k, v);
        }
        for (k, v) in snapshot.suffixes {
            self.suffixes.insert(k, v);
        }
        for (k, v) in snapshot.names {
            self.names.insert(k, v);
        }
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Format tag written into every snapshot. Names depend on the stem tables,
/// so a snapshot is only trusted by the build that wrote it.
pub const SNAPSHOT_FORMAT: &str = concat!(env!("CARGO_PKG_VERSION"), "+schema1");

/// Serializable copy of a [`MemoCache`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    /// [`SNAPSHOT_FORMAT`] of the build that wrote the snapshot.
    pub format: String,
    pub groups: Vec<(DigitGroup, String)>,
    pub prefixes: Vec<(u16, String)>,
    pub suffixes: Vec<(ZillionIndex, String)>,
    pub names: Vec<(NameKey, String)>,
}

impl CacheSnapshot {
    pub fn len(&self) -> usize {
        self.groups.len() + self.prefixes.len() + self.suffixes.len() + self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the first table holding an entry that disagrees with a fresh
    /// computation. Only the group, prefix and suffix tables are checked; full
    /// names cost as much to verify as to rebuild.
    pub fn first_inconsistent_table(&self) -> Option<&'static str> {
        if self.groups.iter().any(|(g, name)| *name != units::name_group(*g)) {
            return Some("groups");
        }
        if self
            .prefixes
            .iter()
            .any(|(v, prefix)| *v >= 1000 || *prefix != zillion::partial_prefix(*v))
        {
            return Some("prefixes");
        }
        if self.suffixes.iter().any(|(n, suffix)| *suffix != zillion::suffix_for(*n)) {
            return Some("suffixes");
        }
        None
    }
}
