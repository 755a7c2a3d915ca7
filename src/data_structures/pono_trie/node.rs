//! Node implementation for the Pono Trie.
//!
//! Each node owns one slot per letter of the 26-letter alphabet. A node that
//! terminates a dictionary word also caches the full word spelled by its path,
//! so a successful walk can report a match without rebuilding the string.

/// Number of letters in the alphabet the trie indexes.
pub const ALPHABET: usize = 26;

/// Maps a letter to its child slot, ignoring case.
///
/// Returns `None` for anything outside `a-z`/`A-Z`; such characters never
/// address a slot.
pub fn slot_index(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some((letter.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// A node in the Pono Trie.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Child nodes, one slot per letter
    children: [Option<Box<TrieNode>>; ALPHABET],

    /// Whether some inserted word ends exactly here
    pub is_endpoint: bool,

    /// Lowercase spelling of the path from the root to this node
    pub word: String,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child for `letter`, if one exists.
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        slot_index(letter).and_then(|i| self.children[i].as_deref())
    }

    /// Returns the mutable slot at `index` (see [`slot_index`]) so insertion
    /// can fill it in.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ALPHABET`.
    pub fn child_slot(&mut self, index: usize) -> &mut Option<Box<TrieNode>> {
        &mut self.children[index]
    }

    /// Iterates over the children that are present.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.iter().filter_map(|c| c.as_deref())
    }
}
