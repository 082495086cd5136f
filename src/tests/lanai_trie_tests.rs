// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the Lanai Trie.
//!
//! Every trie is checked against a plain set of inserted strings.

use proptest::prelude::*;
use std::collections::HashSet;

use super::test_utils::{key_strategy, keys_strategy};
use crate::data_structures::lanai_trie::{AsciiChildren, ChildMap, HashChildren, LanaiTrie};

fn model_is_prefix(model: &HashSet<String>, query: &str) -> bool {
    model.iter().any(|key| key.starts_with(query))
}

fn distinct_prefixes(keys: &[String]) -> usize {
    let mut prefixes = HashSet::new();
    for key in keys {
        for (idx, c) in key.char_indices() {
            prefixes.insert(&key[..idx + c.len_utf8()]);
        }
    }
    prefixes.len()
}

fn check_against_model<C: ChildMap>(keys: &[String], queries: &[String]) -> Result<(), TestCaseError> {
    let trie: LanaiTrie<C> = keys.iter().collect();
    let model: HashSet<String> = keys.iter().cloned().collect();

    for query in keys.iter().chain(queries) {
        prop_assert_eq!(trie.search(query, false), model.contains(query.as_str()));
        // The root always exists, so the empty query is a prefix of anything.
        prop_assert_eq!(
            trie.search(query, true),
            query.is_empty() || model_is_prefix(&model, query)
        );
    }
    prop_assert_eq!(trie.node_count(), distinct_prefixes(keys));
    prop_assert_eq!(trie.root().descendant_count(), trie.node_count());
    Ok(())
}

proptest! {
    // Property: after inserting a key, both searches for it succeed
    #[test]
    fn prop_round_trip(key in key_strategy()) {
        let mut trie = LanaiTrie::new();
        trie.insert(&key);
        prop_assert!(trie.search(&key, false));
        prop_assert!(trie.search(&key, true));
    }

    // Property: proper prefixes of the only key are paths but not entries
    #[test]
    fn prop_prefix_monotonicity(key in key_strategy()) {
        let mut trie = LanaiTrie::new();
        trie.insert(&key);

        for (idx, _) in key.char_indices() {
            let prefix = &key[..idx];
            prop_assert!(trie.search(prefix, true));
            prop_assert!(!trie.search(prefix, false));
        }
    }

    // Property: keys that share no first char with any entry are never found
    #[test]
    fn prop_negative_lookup(keys in keys_strategy(), probe in key_strategy()) {
        let trie: LanaiTrie = keys.iter().collect();
        let probe = format!("z{probe}");
        prop_assert!(!trie.search(&probe, false));
        prop_assert!(!trie.search(&probe, true));
    }

    // Property: inserting twice is indistinguishable from inserting once
    #[test]
    fn prop_idempotence(keys in keys_strategy(), queries in keys_strategy()) {
        let once: LanaiTrie = keys.iter().collect();
        let twice: LanaiTrie = keys.iter().chain(keys.iter()).collect();

        prop_assert_eq!(once.node_count(), twice.node_count());
        for query in keys.iter().chain(&queries) {
            prop_assert_eq!(once.search(query, false), twice.search(query, false));
            prop_assert_eq!(once.search(query, true), twice.search(query, true));
        }
    }

    // Property: the default child map agrees with a set model
    #[test]
    fn prop_hash_children_match_model(keys in keys_strategy(), queries in keys_strategy()) {
        check_against_model::<HashChildren>(&keys, &queries)?;
    }

    // Property: the ASCII child map agrees with a set model
    #[test]
    fn prop_ascii_children_match_model(keys in keys_strategy(), queries in keys_strategy()) {
        check_against_model::<AsciiChildren>(&keys, &queries)?;
    }

    // Property: arbitrary unicode input never breaks insert or search
    #[test]
    fn prop_any_chars(key in any::<String>()) {
        let mut trie = LanaiTrie::<AsciiChildren>::default();
        trie.insert(&key);
        prop_assert!(trie.contains(&key));
        prop_assert_eq!(trie.node_count(), key.chars().count());
    }
}
