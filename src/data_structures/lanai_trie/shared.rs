// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lock-guarded trie for concurrent callers.
//!
//! The whole trie sits behind one reader/writer lock: an insert holds the
//! write lock for its full walk, a query holds the read lock for its full
//! walk. Once building is done, [`SharedTrie::freeze`] drops the lock and
//! hands out an `Arc` that readers share without synchronization.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::data_structures::lanai_trie::children::{ChildMap, HashChildren};
use crate::data_structures::lanai_trie::LanaiTrie;

/// A [`LanaiTrie`] that can be shared between threads and mutated through `&self`.
#[derive(Debug)]
pub struct SharedTrie<C = HashChildren> {
    inner: RwLock<LanaiTrie<C>>,
}

impl<C: ChildMap> Default for SharedTrie<C> {
    fn default() -> Self {
        Self::from_trie(LanaiTrie::default())
    }
}

impl SharedTrie<HashChildren> {
    /// Creates an empty shared trie with the default child map.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ChildMap> SharedTrie<C> {
    /// Wraps an existing trie.
    pub fn from_trie(trie: LanaiTrie<C>) -> Self {
        Self {
            inner: RwLock::new(trie),
        }
    }

    /// Inserts `key` under the write lock.
    pub fn insert<K>(&self, key: K)
    where
        K: AsRef<str>,
    {
        self.inner.write().insert(key);
    }

    /// Inserts every key under a single write lock acquisition.
    pub fn insert_all<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.inner.write().extend(keys);
    }

    /// Runs [`LanaiTrie::search`] under the read lock.
    pub fn search<K>(&self, key: K, allow_prefix: bool) -> bool
    where
        K: AsRef<str>,
    {
        self.inner.read().search(key, allow_prefix)
    }

    /// Runs [`LanaiTrie::contains`] under the read lock.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.inner.read().contains(key)
    }

    /// Runs [`LanaiTrie::starts_with`] under the read lock.
    pub fn starts_with<K>(&self, prefix: K) -> bool
    where
        K: AsRef<str>,
    {
        self.inner.read().starts_with(prefix)
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.inner.read().node_count()
    }

    /// Holds the read lock for a batch of queries.
    ///
    /// Writers block until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, LanaiTrie<C>> {
        self.inner.read()
    }

    /// Releases the lock and returns the trie.
    pub fn into_inner(self) -> LanaiTrie<C> {
        self.inner.into_inner()
    }

    /// Ends the build phase: the returned trie is immutable and can be read
    /// from any number of threads without locking.
    pub fn freeze(self) -> Arc<LanaiTrie<C>> {
        let trie = self.into_inner();
        tracing::debug!(nodes = trie.node_count(), "trie frozen for shared reads");
        Arc::new(trie)
    }
}

impl<C: ChildMap> From<LanaiTrie<C>> for SharedTrie<C> {
    fn from(trie: LanaiTrie<C>) -> Self {
        Self::from_trie(trie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_basic_operations() {
        let trie = SharedTrie::new();
        trie.insert("abcd");
        trie.insert_all(["ab", "xy"]);

        assert!(trie.contains("ab"));
        assert!(!trie.contains("abc"));
        assert!(trie.starts_with("abc"));
        assert!(trie.search("xy", false));
        assert_eq!(trie.node_count(), 6);

        let guard = trie.read();
        assert!(guard.contains("abcd"));
        assert!(!guard.starts_with("z"));
    }

    #[test]
    fn test_shared_parallel_inserts() {
        const THREAD_COUNT: usize = 4;
        const KEYS_PER_THREAD: usize = 100;

        let trie = Arc::new(SharedTrie::new());
        let handles: Vec<_> = (0..THREAD_COUNT)
            .map(|t| {
                let trie = Arc::clone(&trie);
                thread::spawn(move || {
                    for i in 0..KEYS_PER_THREAD {
                        trie.insert(format!("key_{t}_{i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("insert thread panicked");
        }

        let trie = Arc::try_unwrap(trie).expect("all threads joined");
        let frozen = trie.freeze();
        for t in 0..THREAD_COUNT {
            for i in 0..KEYS_PER_THREAD {
                assert!(frozen.contains(format!("key_{t}_{i}")));
            }
        }
        assert!(frozen.starts_with("key_"));
        assert!(!frozen.contains("key_"));
    }

    #[test]
    fn test_round_trip_through_lock() {
        let mut plain = LanaiTrie::new();
        plain.insert("lanai");
        let shared = SharedTrie::from(plain);
        shared.insert("lana");

        let plain = shared.into_inner();
        assert!(plain.contains("lanai"));
        assert!(plain.contains("lana"));
        assert_eq!(plain.node_count(), 5);
    }
}
