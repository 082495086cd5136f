// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Child-lookup strategies for trie nodes.
//!
//! A node delegates all child bookkeeping to a [`ChildMap`]. The choice of map
//! is a memory/locality tradeoff only: every strategy accepts any `char` as a
//! label and answers lookups identically.

use fnv::FnvBuildHasher;
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::data_structures::lanai_trie::node::TrieNode;

/// Number of dense slots in [`AsciiChildren`].
const ASCII_SLOTS: usize = 128;

/// Storage for the direct children of a [`TrieNode`].
///
/// Implementations own their children outright. Keys are unique and no
/// ordering is promised.
pub trait ChildMap: Sized + Default {
    /// Returns the child labelled `label`, if any.
    fn get(&self, label: char) -> Option<&TrieNode<Self>>;

    /// Returns the child labelled `label`, creating it with `make` when absent.
    ///
    /// `make` is called at most once and only when no child exists.
    fn get_or_insert_with(
        &mut self,
        label: char,
        make: impl FnOnce() -> TrieNode<Self>,
    ) -> &mut TrieNode<Self>;

    /// Number of direct children.
    fn len(&self) -> usize;

    /// Whether there are no children.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits the direct children in unspecified order.
    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a TrieNode<Self>>
    where
        Self: 'a;
}

/// Hash map keyed by label, hashed with FNV.
///
/// This is the default strategy: compact for sparse fan-out and indifferent
/// to the alphabet.
#[derive(Debug, Clone, Default)]
pub struct HashChildren {
    map: HashMap<char, TrieNode<HashChildren>, FnvBuildHasher>,
}

impl ChildMap for HashChildren {
    fn get(&self, label: char) -> Option<&TrieNode<Self>> {
        self.map.get(&label)
    }

    fn get_or_insert_with(
        &mut self,
        label: char,
        make: impl FnOnce() -> TrieNode<Self>,
    ) -> &mut TrieNode<Self> {
        self.map.entry(label).or_insert_with(make)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a TrieNode<Self>>
    where
        Self: 'a,
    {
        self.map.values()
    }
}

type AsciiTable = [Option<Box<TrieNode<AsciiChildren>>>; ASCII_SLOTS];

/// Dense table for ASCII labels with a sparse map for everything else.
///
/// The table is allocated on the first ASCII child, so leaves stay small.
/// Lookups of ASCII labels index the table directly.
#[derive(Debug, Clone, Default)]
pub struct AsciiChildren {
    table: Option<Box<AsciiTable>>,
    extended: HashMap<char, TrieNode<AsciiChildren>, FnvBuildHasher>,
    len: usize,
}

impl AsciiChildren {
    fn slot(label: char) -> Option<usize> {
        label.is_ascii().then_some(label as usize)
    }
}

impl ChildMap for AsciiChildren {
    fn get(&self, label: char) -> Option<&TrieNode<Self>> {
        match Self::slot(label) {
            Some(idx) => self.table.as_ref()?[idx].as_deref(),
            None => self.extended.get(&label),
        }
    }

    fn get_or_insert_with(
        &mut self,
        label: char,
        make: impl FnOnce() -> TrieNode<Self>,
    ) -> &mut TrieNode<Self> {
        match Self::slot(label) {
            Some(idx) => {
                let table = self
                    .table
                    .get_or_insert_with(|| Box::new(std::array::from_fn(|_| None)));
                let slot = &mut table[idx];
                if slot.is_none() {
                    self.len += 1;
                }
                slot.get_or_insert_with(|| Box::new(make()))
            }
            None => match self.extended.entry(label) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    self.len += 1;
                    entry.insert(make())
                }
            },
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a TrieNode<Self>>
    where
        Self: 'a,
    {
        self.table
            .iter()
            .flat_map(|table| table.iter().filter_map(|slot| slot.as_deref()))
            .chain(self.extended.values())
    }
}
