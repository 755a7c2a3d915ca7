//! Misspelling generator configuration module.
//!
//! This module defines how many test inputs the generator produces and how
//! aggressively it corrupts them.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Misspelling generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of misspelled words to produce
    pub count: usize,

    /// File the generated words are written to
    pub output: PathBuf,

    /// Seed for reproducible runs (None draws one from the OS)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Probability that a vowel is replaced by a random vowel
    pub vowel_swap_rate: f64,

    /// Probability that a consonant is written twice
    pub double_rate: f64,

    /// Probability that a consonant is uppercased
    pub uppercase_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 50,
            output: PathBuf::from("wordsgenerated.txt"),
            seed: None,
            vowel_swap_rate: 0.3,
            double_rate: 0.2,
            uppercase_rate: 0.2,
        }
    }
}

fn check_rate(key: &str, value: f64) -> ConfigResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            message: format!("{value} is not between 0.0 and 1.0"),
        });
    }
    Ok(())
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.count == 0 {
            return Err(ConfigError::ValidationError(
                "count must be greater than 0".to_string(),
            ));
        }

        check_rate("generator.vowel_swap_rate", self.vowel_swap_rate)?;
        check_rate("generator.double_rate", self.double_rate)?;
        check_rate("generator.uppercase_rate", self.uppercase_rate)?;

        // Doubling and uppercasing are drawn from the same roll
        if self.double_rate + self.uppercase_rate > 1.0 {
            return Err(ConfigError::ValidationError(
                "double_rate + uppercase_rate must not exceed 1.0".to_string(),
            ));
        }

        Ok(())
    }
}
