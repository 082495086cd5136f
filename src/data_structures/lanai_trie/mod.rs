// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! A prefix tree over `char` sequences. Strings are stored by sharing their
//! common prefixes along paths from a single root; each node marks whether a
//! complete inserted string ends there.
//!
//! # Example
//!
//! ```
//! use lanai_trie_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("abcd");
//! trie.insert("ab");
//!
//! assert!(!trie.search("abc", false));
//! assert!(trie.search("abc", true));
//! assert!(trie.search("ab", false));
//! assert!(!trie.search("xyz", true));
//! ```
//!
//! # Child lookup
//!
//! The child map is a type parameter. [`HashChildren`] is the default; the
//! [`AsciiChildren`] strategy trades memory for direct indexing on ASCII
//! input:
//!
//! ```
//! use lanai_trie_lib::data_structures::lanai_trie::{AsciiChildren, LanaiTrie};
//!
//! let mut trie = LanaiTrie::<AsciiChildren>::default();
//! trie.insert("header");
//! assert!(trie.starts_with("head"));
//! ```

mod children;
mod node;
mod shared;

pub use children::{AsciiChildren, ChildMap, HashChildren};
pub use node::{TrieNode, ROOT_LABEL};
pub use shared::SharedTrie;

/// Prefix tree storing strings by shared prefixes.
///
/// Created empty and grown only through [`insert`](Self::insert); there is no
/// removal. All operations are total and run in time linear in the number of
/// chars of their argument.
#[derive(Debug, Clone)]
pub struct LanaiTrie<C = HashChildren> {
    /// The root node; its label is [`ROOT_LABEL`]
    root: TrieNode<C>,

    /// Nodes created by inserts, excluding the root
    node_count: usize,
}

impl LanaiTrie<HashChildren> {
    /// Creates an empty trie with the default child map.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ChildMap> LanaiTrie<C> {
    /// Inserts `key` as a complete entry.
    ///
    /// Walks from the root one char at a time, creating missing nodes, and
    /// marks the last node terminal. Inserting the same key again changes
    /// nothing. The empty key marks the root itself.
    pub fn insert<K>(&mut self, key: K)
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let mut node = &mut self.root;
        let mut created = 0usize;
        let mut walked = 0usize;

        for c in key.chars() {
            let (next, is_new) = node.add_child_tracked(c);
            created += usize::from(is_new);
            walked += 1;
            node = next;
        }
        node.set_end(true);

        self.node_count += created;
        tracing::trace!(chars = walked, created, "inserted key");
    }

    /// Queries `key`.
    ///
    /// Fails as soon as a char has no matching child. If the whole walk
    /// succeeds, returns `true` when `allow_prefix` is set and otherwise
    /// whether `key` was itself inserted.
    pub fn search<K>(&self, key: K, allow_prefix: bool) -> bool
    where
        K: AsRef<str>,
    {
        match self.walk(key.as_ref()) {
            Some(node) => allow_prefix || node.is_end(),
            None => false,
        }
    }

    /// Whether `key` was inserted as a complete entry.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.search(key, false)
    }

    /// Whether `key` is a path in the trie, i.e. a prefix of some entry.
    pub fn starts_with<K>(&self, prefix: K) -> bool
    where
        K: AsRef<str>,
    {
        self.search(prefix, true)
    }

    /// Whether nothing has been inserted, not even the empty string.
    pub fn is_empty(&self) -> bool {
        self.node_count == 0 && !self.root.is_end()
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode<C> {
        &self.root
    }

    fn walk(&self, key: &str) -> Option<&TrieNode<C>> {
        key.chars().try_fold(&self.root, |node, c| node.child(c))
    }
}

impl<C: ChildMap> Default for LanaiTrie<C> {
    fn default() -> Self {
        Self {
            root: TrieNode::root(),
            node_count: 0,
        }
    }
}

impl<C: ChildMap, K: AsRef<str>> Extend<K> for LanaiTrie<C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        let before = self.node_count;
        let mut keys = 0usize;
        for key in iter {
            self.insert(key);
            keys += 1;
        }
        tracing::debug!(
            keys,
            created = self.node_count - before,
            total = self.node_count,
            "bulk insert finished"
        );
    }
}

impl<C: ChildMap, K: AsRef<str>> FromIterator<K> for LanaiTrie<C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Self::default();
        trie.extend(iter);
        trie
    }
}
