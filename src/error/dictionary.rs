//! Dictionary error module.
//!
//! This module defines error types that may occur while reading a dictionary
//! file into the index.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the dictionary file is missing.
    #[error("Dictionary file not found: {0}")]
    NotFound(PathBuf),

    /// Error when the dictionary file cannot be read.
    #[error("Failed to read dictionary file {path}: {source}")]
    Read {
        /// Path of the dictionary file
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error when the dictionary file contains no words.
    #[error("Dictionary file contains no words: {0}")]
    Empty(PathBuf),
}
