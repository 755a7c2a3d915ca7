//! Interactive prompt configuration module.
//!
//! This module defines how the read-eval loop reads queries and what it
//! prints for them.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Interactive prompt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Token that ends the session
    pub sentinel: String,

    /// Whether to print how long each correction took
    pub show_timing: bool,

    /// Longest token accepted as a query
    pub max_word_length: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            sentinel: "-1".to_string(),
            show_timing: true,
            max_word_length: 64,
        }
    }
}

impl Validate for ReplConfig {
    fn validate(&self) -> ConfigResult<()> {
        // The sentinel is compared against whitespace-separated tokens
        if self.sentinel.is_empty() || self.sentinel.contains(char::is_whitespace) {
            return Err(ConfigError::ValidationError(
                "sentinel must be a non-empty token without whitespace".to_string(),
            ));
        }

        if self.max_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
