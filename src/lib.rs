//! Pono Spelling Corrector Library
//!
//! This library contains the core components of the Pono spelling corrector:
//! the dictionary index and its fuzzy correction search, plus the pieces the
//! binary wires around it (configuration, dictionary loading, the interactive
//! prompt and the misspelling generator).
//!
//! # Architecture
//!
//! The corrector is designed with the following principles in mind:
//! - The index is built once and is read-only afterwards
//! - The correction search only models the known error classes (doubled
//!   letters, vowel confusion, letter case), not general edit distance
//! - Everything random is driven by an explicitly passed generator
//! - IO lives at the edges; the index never touches files or terminals

pub mod config;
pub mod data_structures;
pub mod error;
pub mod generator;
pub mod loader;
pub mod repl;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::PonoTrie;

/// Version information for the Pono spelling corrector.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
