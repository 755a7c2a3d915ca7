//! Data structures for the Pono spelling corrector.
//!
//! This module contains the dictionary index and the node type it is built
//! from. The index is built once, then only read while answering queries.

pub mod pono_trie;

// Re-export common data structures
pub use pono_trie::{PonoTrie, TrieNode};
