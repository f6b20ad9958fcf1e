//! crates/attributes/src/error.rs
//!
//! Error types for permission record updates.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when an octal mode string cannot be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid octal mode '{text}': {source}")]
pub struct OctalModeError {
    text: String,
    #[source]
    source: ParseIntError,
}

impl OctalModeError {
    pub(crate) fn new(text: &str, source: ParseIntError) -> Self {
        Self {
            text: text.to_owned(),
            source,
        }
    }

    /// Returns the text that failed to decode.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
