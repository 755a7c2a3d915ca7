//! Test modules for the Pono spelling corrector.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests for the correction search
//!
//! Unit tests for individual components live next to the code they test.

pub mod test_utils;
