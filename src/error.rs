//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum covering all error
//! cases in the library.
//!
//! Note that the parser itself never appears here: malformed export lines
//! are dropped by policy rather than surfaced as errors, so the variants
//! below cover the surrounding concerns only (file I/O, filter
//! configuration, report serialization).

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8 text
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect `YYYY-MM-DD` format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing the report as JSON.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatlensError {
    /// Creates an [`InvalidDate`](Self::InvalidDate) error for a filter date.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }
}
