//! Data structures for the Lanai Trie.

pub mod lanai_trie;

pub use lanai_trie::{LanaiTrie, SharedTrie, TrieNode};
