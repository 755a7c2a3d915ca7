//! Misspelling generator.
//!
//! Produces test inputs for the corrector by corrupting dictionary words the
//! same way the corrector expects them to be corrupted: vowels swapped for
//! other vowels, consonants doubled, consonants uppercased.
//!
//! The random source is always passed in, so a fixed seed reproduces a run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::data_structures::pono_trie::{is_vowel, VOWELS};

/// Corrupts words using an explicitly owned random source.
#[derive(Debug)]
pub struct Misspeller<R: Rng> {
    rng: R,
    vowel_swap_rate: f64,
    double_rate: f64,
    uppercase_rate: f64,
}

impl Misspeller<StdRng> {
    /// Creates a misspeller whose output is fully determined by `seed`.
    pub fn seeded(config: &GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a misspeller from the configured seed, or an OS-seeded one.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(config, seed),
            None => Self::with_rng(config, StdRng::from_os_rng()),
        }
    }
}

impl<R: Rng> Misspeller<R> {
    /// Creates a misspeller drawing from the given random source.
    pub fn with_rng(config: &GeneratorConfig, rng: R) -> Self {
        Self {
            rng,
            vowel_swap_rate: config.vowel_swap_rate,
            double_rate: config.double_rate,
            uppercase_rate: config.uppercase_rate,
        }
    }

    /// Returns a corrupted copy of `word`.
    ///
    /// Each vowel is, with `vowel_swap_rate`, replaced by a uniformly chosen
    /// vowel (possibly itself). Each consonant is doubled with `double_rate`,
    /// otherwise uppercased with `uppercase_rate`.
    pub fn misspell(&mut self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() * 2);

        for c in word.chars() {
            let roll: f64 = self.rng.random();
            if is_vowel(c) {
                if roll < self.vowel_swap_rate {
                    out.push(VOWELS[self.rng.random_range(0..VOWELS.len())]);
                } else {
                    out.push(c);
                }
            } else if roll < self.double_rate {
                out.push(c);
                out.push(c);
            } else if roll < self.double_rate + self.uppercase_rate {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }

        out
    }

    /// Picks `count` random words (with replacement) and misspells each one.
    ///
    /// Returns an empty list for an empty dictionary.
    pub fn sample<S: AsRef<str>>(&mut self, dictionary: &[S], count: usize) -> Vec<String> {
        if dictionary.is_empty() {
            return Vec::new();
        }

        (0..count)
            .map(|_| {
                let word = dictionary[self.rng.random_range(0..dictionary.len())].as_ref();
                self.misspell(word)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[test]
    fn test_same_seed_same_output() {
        let words = ["apple", "banana", "cherry", "syzygy"];
        let first = Misspeller::seeded(&config(), 7).sample(&words, 20);
        let second = Misspeller::seeded(&config(), 7).sample(&words, 20);
        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
    }

    #[test]
    fn test_zero_rates_leave_words_alone() {
        let quiet = GeneratorConfig {
            vowel_swap_rate: 0.0,
            double_rate: 0.0,
            uppercase_rate: 0.0,
            ..config()
        };
        let mut misspeller = Misspeller::seeded(&quiet, 1);
        assert_eq!(misspeller.misspell("banana"), "banana");
    }

    #[test]
    fn test_full_double_rate_doubles_every_consonant() {
        let doubling = GeneratorConfig {
            vowel_swap_rate: 0.0,
            double_rate: 1.0,
            uppercase_rate: 0.0,
            ..config()
        };
        let mut misspeller = Misspeller::seeded(&doubling, 3);
        assert_eq!(misspeller.misspell("cat"), "ccatt");
    }

    #[test]
    fn test_full_uppercase_rate_uppercases_consonants() {
        let shouting = GeneratorConfig {
            vowel_swap_rate: 0.0,
            double_rate: 0.0,
            uppercase_rate: 1.0,
            ..config()
        };
        let mut misspeller = Misspeller::seeded(&shouting, 3);
        assert_eq!(misspeller.misspell("banana"), "BaNaNa");
    }

    #[test]
    fn test_vowels_stay_vowels() {
        let swapping = GeneratorConfig {
            vowel_swap_rate: 1.0,
            double_rate: 0.0,
            uppercase_rate: 0.0,
            ..config()
        };
        let mut misspeller = Misspeller::seeded(&swapping, 11);
        for _ in 0..50 {
            let out = misspeller.misspell("aeiou");
            assert_eq!(out.len(), 5);
            assert!(out.chars().all(is_vowel));
        }
    }

    #[test]
    fn test_empty_dictionary_yields_nothing() {
        let empty: [&str; 0] = [];
        assert!(Misspeller::seeded(&config(), 0).sample(&empty, 10).is_empty());
    }
}
