//! Dictionary configuration module.
//!
//! This module defines where the word list is read from.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the system word list.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path to the word list, one word per line
    pub path: PathBuf,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
