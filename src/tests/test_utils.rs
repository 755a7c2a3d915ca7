//! Test utilities and fixtures for the Pono spelling corrector.
//!
//! This module provides proptest strategies that model the corruptions the
//! corrector is built for, and a fixture for tests that need files on disk.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

use crate::data_structures::pono_trie::{is_vowel, VOWELS};

/// Maximum length of a generated dictionary word.
const MAX_WORD_LENGTH: usize = 12;

/// Maximum number of words in a generated dictionary.
const MAX_DICTIONARY_SIZE: usize = 40;

/// Generate lowercase dictionary words.
pub fn word_strategy() -> BoxedStrategy<String> {
    prop::string::string_regex(&format!("[a-z]{{1,{MAX_WORD_LENGTH}}}"))
        .expect("valid word regex")
        .boxed()
}

/// Generate small dictionaries of lowercase words.
pub fn dictionary_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 1..MAX_DICTIONARY_SIZE).boxed()
}

/// Decisions for corrupting one letter of a word.
#[derive(Debug, Clone, Copy)]
pub struct LetterNoise {
    /// Vowel index to substitute with (vowels only)
    pub vowel: Option<usize>,
    /// Whether to write the letter twice (letters left as typed only)
    pub double: bool,
    /// Whether to uppercase the letter
    pub uppercase: bool,
}

/// Generate per-letter corruption decisions.
pub fn noise_strategy() -> BoxedStrategy<Vec<LetterNoise>> {
    proptest::collection::vec(
        (
            proptest::option::of(0..VOWELS.len()),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(vowel, double, uppercase)| LetterNoise {
                vowel,
                double,
                uppercase,
            }),
        MAX_WORD_LENGTH,
    )
    .boxed()
}

/// Corrupt `word` within the modeled error classes.
///
/// Vowels may be swapped for any vowel, letters that keep their original
/// value may be doubled, and any letter may change case. A swapped vowel is
/// never doubled.
pub fn corrupt(word: &str, noise: &[LetterNoise]) -> String {
    let mut out = String::new();
    for (c, n) in word.chars().zip(noise.iter().cycle()) {
        let mut letter = c;
        if is_vowel(c) {
            if let Some(v) = n.vowel {
                letter = VOWELS[v];
            }
        }
        let letter = if n.uppercase {
            letter.to_ascii_uppercase()
        } else {
            letter
        };
        out.push(letter);
        if n.double && letter.to_ascii_lowercase() == c {
            out.push(letter);
        }
    }
    out
}

/// Test fixture for tests that need files on disk.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
