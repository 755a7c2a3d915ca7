//! Input error module.
//!
//! This module defines the ways a query token can be rejected before it is
//! handed to the corrector.

use thiserror::Error;

/// Errors for query tokens that cannot be corrected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The token is empty.
    #[error("Empty input")]
    Empty,

    /// The token contains something other than the letters a-z.
    #[error("Input '{0}' contains characters outside [a-z]")]
    NonAlphabetic(String),

    /// The token is longer than the configured maximum.
    #[error("Input is {len} characters long, the maximum is {max}")]
    TooLong {
        /// Length of the rejected token
        len: usize,
        /// Maximum accepted length
        max: usize,
    },
}
