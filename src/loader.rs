//! Dictionary loading.
//!
//! Reads a word list (one word per line, mixed case) and builds the
//! [`PonoTrie`] the corrector queries.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::data_structures::PonoTrie;
use crate::error::DictionaryError;

/// A dictionary that has been read into an index.
#[derive(Debug)]
pub struct LoadedDictionary {
    /// The populated index
    pub trie: PonoTrie,

    /// Number of words read from the source, duplicates included
    pub words_read: usize,

    /// How long reading and indexing took
    pub elapsed: Duration,
}

/// Splits a word source on whitespace and lowercases every token.
pub fn read_words<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_lowercase));
    }
    Ok(words)
}

/// Reads the word list at `path`.
///
/// # Errors
///
/// * `DictionaryError::NotFound` if the file does not exist
/// * `DictionaryError::Read` if it cannot be opened or read
/// * `DictionaryError::Empty` if it holds no words
pub fn read_word_file(path: &Path) -> Result<Vec<String>, DictionaryError> {
    let read_error = |source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DictionaryError::NotFound(path.to_path_buf()),
        _ => read_error(e),
    })?;

    let words = read_words(BufReader::new(file)).map_err(read_error)?;
    if words.is_empty() {
        return Err(DictionaryError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), words = words.len(), "Read word list");
    Ok(words)
}

/// Loads the word list at `path` into a fresh index.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<LoadedDictionary, DictionaryError> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let start = Instant::now();

    let words = read_word_file(&path)?;
    let trie = PonoTrie::from_words(&words);
    let elapsed = start.elapsed();

    info!(
        path = %path.display(),
        words = words.len(),
        unique_words = trie.word_count(),
        nodes = trie.node_count(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Dictionary loaded"
    );

    Ok(LoadedDictionary {
        trie,
        words_read: words.len(),
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_read_words_lowercases_and_splits() {
        let source = Cursor::new("Apple\nbanana  Cherry\n\n  date\n");
        let words = read_words(source).unwrap();
        assert_eq!(words, vec!["apple", "banana", "cherry", "date"]);
    }

    #[test]
    fn test_load_dictionary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words");
        std::fs::write(&path, "Cat\ncot\ncoot\ndog\ncat\n").unwrap();

        let loaded = load_dictionary(&path).unwrap();
        assert_eq!(loaded.words_read, 5);
        assert_eq!(loaded.trie.word_count(), 4);
        assert!(loaded.trie.contains("cat"));
        assert!(loaded.trie.contains("coot"));
    }

    #[test]
    fn test_missing_dictionary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing");

        match load_dictionary(&path) {
            Err(DictionaryError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_dictionary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty");
        std::fs::write(&path, "\n   \n").unwrap();

        assert!(matches!(
            load_dictionary(&path),
            Err(DictionaryError::Empty(_))
        ));
    }
}
