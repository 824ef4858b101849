//! Filter messages by author and date range.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for scoping a record set before aggregation. The
//! per-author views every statistic offers are built on this: filter to one
//! author, then aggregate.
//!
//! # Examples
//!
//! ## Filter by Author
//!
//! ```
//! use chatlens::stats::{FilterConfig, apply_filters};
//! use chatlens::parser::parse;
//!
//! let messages = parse(
//!     "1/2/2024, 9:05 am - Alice: Hello\n\
//!      1/2/2024, 9:06 am - Bob: Hi there\n\
//!      1/2/2024, 9:07 am - Alice: How are you?",
//! );
//!
//! let config = FilterConfig::new().with_author("Alice");
//! let filtered = apply_filters(messages, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatlens::stats::{FilterConfig, apply_filters};
//! use chatlens::parser::parse;
//!
//! # fn main() -> chatlens::Result<()> {
//! let messages = parse(
//!     "1/1/2024, 9:05 am - Alice: Old\n\
//!      15/6/2024, 9:05 am - Alice: New",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Author matching is exact string equality
//! - Date bounds are inclusive on both ends
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use crate::Message;
use crate::error::ChatlensError;

/// Configuration for filtering messages by author and date range.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatlens::stats::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// // Author only
/// let by_author = FilterConfig::new().with_author("Alice");
///
/// // Date range
/// let by_date = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
///
/// // Combined
/// let combined = FilterConfig::new()
///     .with_author("Alice")
///     .with_date_from("2024-06-01")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub before: Option<NaiveDate>,

    /// Include only messages from this author (exact match).
    pub author: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author filter.
    ///
    /// Only messages whose author equals the given name are included.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.author.is_some()
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns a new vector containing only messages that match all active
/// filters. If no filters are active, returns the input unchanged. Input
/// order is preserved.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| {
            if let Some(ref author) = config.author {
                if msg.author != *author {
                    return false;
                }
            }
            if config.after.is_some_and(|after| msg.date < after) {
                return false;
            }
            if config.before.is_some_and(|before| msg.date > before) {
                return false;
            }
            true
        })
        .collect()
}
