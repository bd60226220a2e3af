//! Eviction Module
//!
//! Bounded cache with first-in-first-out eviction.

use hashbrown::HashMap;
use std::collections::VecDeque;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Fixed-capacity cache evicting the oldest inserted entry
///
/// Reads never refresh an entry's position: an entry inserted first is
/// evicted first no matter how often it was hit since.
#[derive(Debug, Clone)]
pub struct FifoCache<K, V> {
    /// Insertion order (oldest at front)
    order: VecDeque<K>,
    entries: HashMap<K, V>,
    capacity: NonZeroUsize,
}

impl<K, V> FifoCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty cache holding at most `capacity` entries
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity.get()),
            entries: HashMap::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Check if key is cached
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Get a cached value
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert or overwrite a value, returning the evicted entry if any
    ///
    /// Overwriting keeps the key's original insertion position.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity.get() {
            self.order
                .pop_front()
                .and_then(|oldest| self.entries.remove(&oldest).map(|v| (oldest, v)))
        } else {
            None
        };

        self.order.push_back(key.clone());
        self.entries.insert(key, value);
        evicted
    }

    /// Keys from oldest to newest
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> FifoCache<u32, &'static str> {
        FifoCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_basic_operations() {
        let mut cache = cache(2);
        assert!(cache.is_empty());

        assert!(cache.put(1, "one").is_none());
        assert!(cache.contains(&1));
        assert_eq!(cache.get(&1), Some(&"one"));
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), 2);
    }

    #[test]
    fn test_fifo_eviction() {
        for capacity in 1..=8 {
            let mut cache = cache(capacity);
            for id in 0..capacity as u32 {
                cache.put(id, "v");
            }
            let evicted = cache.put(capacity as u32, "new");
            assert_eq!(evicted.map(|(k, _)| k), Some(0));
            assert!(!cache.contains(&0));
            assert!(cache.contains(&(capacity as u32)));
            assert_eq!(cache.len(), capacity);
        }
    }

    #[test]
    fn test_access_does_not_refresh() {
        let mut cache = cache(3);
        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(3, "c");

        // Hit 'a' repeatedly; LRU would protect it, FIFO must not
        for _ in 0..5 {
            assert!(cache.get(&1).is_some());
        }

        cache.put(4, "d");
        assert!(!cache.contains(&1));
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut cache = cache(2);
        cache.put(1, "a");
        cache.put(2, "b");

        assert!(cache.put(1, "a2").is_none());
        assert_eq!(cache.get(&1), Some(&"a2"));
        assert_eq!(cache.len(), 2);

        let evicted = cache.put(3, "c");
        assert_eq!(evicted, Some((1, "a2")));
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_clear() {
        let mut cache = cache(2);
        cache.put(1, "a");
        cache.put(2, "b");
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.keys().count(), 0);
        cache.put(3, "c");
        assert_eq!(cache.len(), 1);
    }
}
