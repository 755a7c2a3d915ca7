//! Pono Trie Implementation
//!
//! This module provides the dictionary index behind the spelling corrector:
//! a 26-way prefix tree with exact lookup and a fuzzy correction search.
//!
//! The fuzzy search only models the corruptions the input source is known to
//! produce:
//!
//! * doubled letters (`ccat` for `cat`)
//! * vowel interchange (`cit` for `cat`)
//! * letter case (normalized away before the walk starts)
//!
//! It is not a general edit-distance search. Branches are pruned purely by the
//! shape of the trie, so the work done is proportional to how dense the
//! dictionary is around the query rather than to the size of an edit ball.

mod node;

use std::collections::BTreeSet;

pub use node::{slot_index, TrieNode, ALPHABET};

/// Vowels that may stand in for one another during fuzzy search.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Returns true for the five lowercase vowels.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Pono Trie is a prefix tree over the lowercase alphabet used to hold a
/// static dictionary and answer correction queries against it.
///
/// Key features:
/// * Case-insensitive insertion and lookup
/// * Non-alphabetic characters are skipped, so `don't` and `dont` are the same word
/// * Exact matches short-circuit the fuzzy search
/// * Read-only after loading; share it behind an `Arc` for concurrent queries
#[derive(Debug, Clone, Default)]
pub struct PonoTrie {
    /// The root node; its path is the empty string
    root: TrieNode,

    /// Number of non-root nodes created so far
    node_count: usize,

    /// Number of distinct words marked as endpoints
    word_count: usize,
}

impl PonoTrie {
    /// Creates a new empty `PonoTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from a sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }

    /// Inserts a word into the trie.
    ///
    /// Letters are lowercased and anything outside `a-z` is skipped. Inserting
    /// a word that is already present creates no nodes. An empty (or entirely
    /// non-alphabetic) word marks the root itself as an endpoint.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    pub fn insert<W>(&mut self, word: W)
    where
        W: AsRef<str>,
    {
        let mut node = &mut self.root;
        let mut prefix = String::with_capacity(word.as_ref().len());
        let mut created = 0;

        for c in word.as_ref().chars() {
            let Some(index) = slot_index(c) else {
                continue;
            };
            prefix.push(c.to_ascii_lowercase());

            let child: &mut TrieNode = node.child_slot(index).get_or_insert_with(|| {
                created += 1;
                Box::new(TrieNode::new())
            });
            if child.word != prefix {
                child.word.clone_from(&prefix);
            }
            node = child;
        }

        if !node.is_endpoint {
            node.is_endpoint = true;
            self.word_count += 1;
        }
        self.node_count += created;
    }

    /// Checks if a word is in the trie.
    ///
    /// Walks the same path `insert` would, skipping non-alphabetic characters
    /// and ignoring case.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to look up.
    ///
    /// # Returns
    ///
    /// `true` if the walk completes on an endpoint, `false` otherwise.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let mut node = &self.root;
        for c in word.as_ref().chars() {
            if slot_index(c).is_none() {
                continue;
            }
            match node.child(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_endpoint
    }

    /// Returns the dictionary words the given token was plausibly meant to be.
    ///
    /// The token is lowercased first. If it is already a dictionary word the
    /// result is exactly that word; otherwise the fuzzy search runs and every
    /// endpoint it reaches is collected. An empty token, or one with no
    /// plausible match, yields an empty set.
    ///
    /// # Arguments
    ///
    /// * `word` - The (possibly misspelled) token. Callers are expected to
    ///   pass a non-empty alphabetic token.
    pub fn corrections<W>(&self, word: W) -> BTreeSet<String>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref().to_lowercase();
        let mut results = BTreeSet::new();

        if word.is_empty() {
            return results;
        }

        if self.contains(&word) {
            results.insert(word);
            return results;
        }

        let chars: Vec<char> = word.chars().collect();
        self.fuzzy_search(&chars, &self.root, &mut results);
        results
    }

    /// Recursive walk behind [`corrections`](Self::corrections).
    ///
    /// Every call consumes at least one character of `remaining`, so the
    /// recursion depth is bounded by the length of the query.
    fn fuzzy_search(&self, remaining: &[char], node: &TrieNode, results: &mut BTreeSet<String>) {
        let Some((&c, rest)) = remaining.split_first() else {
            if node.is_endpoint {
                results.insert(node.word.clone());
            }
            return;
        };

        if is_vowel(c) {
            // Any vowel may stand in for any other, including itself.
            for v in VOWELS {
                if let Some(child) = node.child(v) {
                    self.fuzzy_search(rest, child, results);
                }
            }
        } else if let Some(child) = node.child(c) {
            self.fuzzy_search(rest, child, results);
        }

        // A repeated letter may collapse onto a single edge. Only the letter
        // as typed is tried here, never a vowel substitute.
        if rest.first() == Some(&c) {
            if let Some(child) = node.child(c) {
                self.fuzzy_search(&rest[1..], child, results);
            }
        }
    }

    /// Returns the number of nodes in the trie, not counting the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of distinct words in the trie.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Checks if no word has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl<S> Extend<S> for PonoTrie
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}
