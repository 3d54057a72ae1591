//! Caller-owned keyed caches.

use std::collections::VecDeque;
use std::hash::Hash;

use ahash::AHashMap;

/// What a [`KeyedCache`] does when it is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicy {
    /// Grow without bound.
    NoEviction,
    /// Keep at most this many entries, evicting the least recently used.
    Lru(usize),
}

/// A keyed cache owned by whoever needs the memoization.
///
/// There is no process-wide instance and no interior mutability: the owner
/// decides where the cache lives, how large it may grow and when it is
/// dropped.
///
/// # Examples
///
/// ```
/// use tanager::util::cache::{EvictionPolicy, KeyedCache};
///
/// let mut cache = KeyedCache::new(EvictionPolicy::Lru(2));
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.put("c", 3);
/// assert_eq!(cache.get(&"a"), None);
/// assert_eq!(cache.get(&"c"), Some(&3));
/// ```
pub struct KeyedCache<K: Eq + Hash + Clone, V> {
    entries: AHashMap<K, V>,
    recency: VecDeque<K>,
    policy: EvictionPolicy,
}

impl<K: Eq + Hash + Clone, V> KeyedCache<K, V> {
    /// Create an empty cache with the given eviction policy.
    pub fn new(policy: EvictionPolicy) -> Self {
        KeyedCache {
            entries: AHashMap::new(),
            recency: VecDeque::new(),
            policy,
        }
    }

    /// Look up `key`, marking it most recently used on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if self.entries.contains_key(key) {
            self.touch(key);
            self.entries.get(key)
        } else {
            None
        }
    }

    /// Insert or replace the entry for `key`, evicting the least recently
    /// used entry when the policy's capacity is exceeded.
    pub fn put(&mut self, key: K, value: V) {
        if self.entries.insert(key.clone(), value).is_some() {
            self.touch(&key);
        } else {
            self.recency.push_back(key);
            if let EvictionPolicy::Lru(capacity) = self.policy {
                while self.entries.len() > capacity {
                    if let Some(oldest) = self.recency.pop_front() {
                        self.entries.remove(&oldest);
                    } else {
                        break;
                    }
                }
            }
        }
    }

    /// Look up `key`, inserting the value produced by `fill` on a miss.
    pub fn get_or_insert_with(&mut self, key: K, fill: impl FnOnce() -> V) -> &V {
        if !self.entries.contains_key(&key) {
            self.put(key.clone(), fill());
        } else {
            self.touch(&key);
        }
        &self.entries[&key]
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, keeping the policy.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    fn touch(&mut self, key: &K) {
        if let Some(position) = self.recency.iter().position(|k| k == key) {
            self.recency.remove(position);
        }
        self.recency.push_back(key.clone());
    }
}
