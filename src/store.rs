// src/store.rs
//
// In-memory, time-bounded cache for pipeline results. No persistence, no
// explicit invalidation: entries just stop being returned once their TTL is up.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, (Instant, V)>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: HashMap::new() }
    }

    /// Clone of the entry if it is younger than the TTL.
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// `get` against an explicit clock reading.
    pub fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        let (stored, value) = self.entries.get(key)?;
        if now.saturating_duration_since(*stored) < self.ttl {
            Some(value.clone())
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    pub fn insert_at(&mut self, key: K, value: V, now: Instant) {
        self.entries.insert(key, (now, value));
    }

    /// Drop expired entries; returns how many went.
    pub fn purge_expired(&mut self) -> usize {
        if self.is_empty() { return 0; }
        let now = Instant::now();
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, (stored, _)| now.saturating_duration_since(*stored) < ttl);
        before - self.entries.len()
    }

    /// Stored entries, expired or not.
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
