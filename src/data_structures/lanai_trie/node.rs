// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Each node stands for one prefix: the labels on the path from the root
//! spell it out. Nodes own their children, so the whole structure is a tree
//! that is dropped as a unit.

use crate::data_structures::lanai_trie::children::{ChildMap, HashChildren};

/// Label carried by the root node. It never takes part in a prefix.
pub const ROOT_LABEL: char = '\0';

/// A node in the Lanai Trie.
#[derive(Debug, Clone)]
pub struct TrieNode<C = HashChildren> {
    /// The character this node represents
    label: char,

    /// Direct children keyed by label
    children: C,

    /// Whether an inserted string ends exactly here
    is_terminal: bool,
}

impl<C: ChildMap> TrieNode<C> {
    /// Creates a childless, non-terminal node labelled `label`.
    pub fn new(label: char) -> Self {
        Self {
            label,
            children: C::default(),
            is_terminal: false,
        }
    }

    /// Creates the root node.
    pub(crate) fn root() -> Self {
        Self::new(ROOT_LABEL)
    }

    /// The character this node represents.
    pub fn label(&self) -> char {
        self.label
    }

    /// The child map of this node.
    pub fn children(&self) -> &C {
        &self.children
    }

    /// Returns the child labelled `label`, creating it first if needed.
    ///
    /// Repeated calls with the same label return the same node.
    pub fn add_child(&mut self, label: char) -> &mut Self {
        self.add_child_tracked(label).0
    }

    /// Like [`add_child`](Self::add_child), also reporting whether the child
    /// had to be created.
    pub(crate) fn add_child_tracked(&mut self, label: char) -> (&mut Self, bool) {
        let mut created = false;
        let child = self.children.get_or_insert_with(label, || {
            created = true;
            Self::new(label)
        });
        (child, created)
    }

    /// Returns the child labelled `label`, or `None` when there is none.
    pub fn child(&self, label: char) -> Option<&Self> {
        self.children.get(label)
    }

    /// Whether an inserted string ends at this node.
    pub fn is_end(&self) -> bool {
        self.is_terminal
    }

    /// Sets or clears the terminal flag.
    pub fn set_end(&mut self, is_end: bool) {
        self.is_terminal = is_end;
    }

    /// Number of nodes below this one, not counting itself.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Self> = self.children.nodes().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.nodes());
        }
        count
    }
}

impl<C: ChildMap> Default for TrieNode<C> {
    fn default() -> Self {
        Self::root()
    }
}
