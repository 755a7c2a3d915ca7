//! Interactive read-eval loop.
//!
//! Reads one token at a time, validates it, and prints the corrections the
//! index finds for it. Input and output are generic so the loop can be driven
//! from a terminal, a pipe from the generator, or a test buffer.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::time::Instant;

use tracing::debug;

use crate::config::ReplConfig;
use crate::data_structures::PonoTrie;
use crate::error::{InputError, PonoResult};

/// Checks that a token can be handed to the corrector.
///
/// # Errors
///
/// * `InputError::Empty` for an empty token
/// * `InputError::TooLong` if the token exceeds `max_len` characters
/// * `InputError::NonAlphabetic` if it holds anything outside `a-z`/`A-Z`
pub fn validate_token(token: &str, max_len: usize) -> Result<(), InputError> {
    if token.is_empty() {
        return Err(InputError::Empty);
    }

    let len = token.chars().count();
    if len > max_len {
        return Err(InputError::TooLong { len, max: max_len });
    }

    if !token.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(InputError::NonAlphabetic(token.to_string()));
    }

    Ok(())
}

/// Counters for a finished session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplSummary {
    /// Valid tokens that were looked up
    pub queries: usize,

    /// Tokens rejected by validation
    pub invalid: usize,

    /// Valid tokens that produced no suggestion
    pub unmatched: usize,
}

/// The interactive prompt.
#[derive(Debug)]
pub struct Repl<'a> {
    trie: &'a PonoTrie,
    config: &'a ReplConfig,
}

impl<'a> Repl<'a> {
    /// Creates a prompt answering queries from `trie`.
    pub fn new(trie: &'a PonoTrie, config: &'a ReplConfig) -> Self {
        Self { trie, config }
    }

    /// Runs the loop until the sentinel token or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> PonoResult<ReplSummary> {
        let mut summary = ReplSummary::default();
        let mut lines = input.lines();
        let mut pending = Vec::<String>::new().into_iter();

        'session: loop {
            writeln!(output, "Enter a word ('{}' to quit):", self.config.sentinel)?;
            write!(output, " > ")?;
            output.flush()?;

            let token = loop {
                if let Some(token) = pending.next() {
                    break token;
                }
                match lines.next() {
                    Some(line) => {
                        let line = line?;
                        pending = line
                            .split_whitespace()
                            .map(str::to_string)
                            .collect::<Vec<_>>()
                            .into_iter();
                    }
                    None => {
                        writeln!(output)?;
                        break 'session;
                    }
                }
            };

            if token == self.config.sentinel {
                break;
            }

            if let Err(e) = validate_token(&token, self.config.max_word_length) {
                debug!(token = %token, error = %e, "Rejected input");
                summary.invalid += 1;
                writeln!(
                    output,
                    "Invalid input! Please try again with a word containing only [a-z]."
                )?;
                continue;
            }

            summary.queries += 1;
            let start = Instant::now();
            let corrections = self.trie.corrections(&token);
            let elapsed = start.elapsed();

            debug!(
                token = %token,
                suggestions = corrections.len(),
                elapsed_us = elapsed.as_micros() as u64,
                "Corrected input"
            );

            if corrections.is_empty() {
                summary.unmatched += 1;
                writeln!(output, "No Suggestions")?;
            } else {
                self.print_corrections(&mut output, &corrections, elapsed.as_micros())?;
            }
        }

        writeln!(output, "Terminating program execution...")?;
        output.flush()?;
        Ok(summary)
    }

    fn print_corrections<W: Write>(
        &self,
        output: &mut W,
        corrections: &BTreeSet<String>,
        elapsed_us: u128,
    ) -> PonoResult<()> {
        if self.config.show_timing {
            writeln!(
                output,
                "{} possible correction(s) found in {} microsecond(s).",
                corrections.len(),
                elapsed_us
            )?;
        } else {
            writeln!(output, "{} possible correction(s) found.", corrections.len())?;
        }

        let words: Vec<&str> = corrections.iter().map(String::as_str).collect();
        writeln!(output, "Suggestion(s): {}", words.join(" "))?;
        Ok(())
    }
}
