//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and deriving activity
//! statistics from them.
//!
//! ## Overview
//!
//! Chatlens takes the text blob produced by WhatsApp's "export chat"
//! feature and turns it into a structured record sequence, then offers a
//! set of aggregations over those records: message/word/media counts, link
//! extraction, emoji frequency, most-common words, busiest participants,
//! and time-based activity distributions.
//!
//! The heart of the crate is the [`parser`] module. Export text is messy —
//! multiple timestamp spellings, narrow no-break spaces before the am/pm
//! suffix, multiline message bodies, system notices with no author — and
//! every statistic downstream is only meaningful if that text is converted
//! into clean records. Parsing is best-effort by design: malformed lines
//! are dropped, never fatal.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let export = "\
//! 1/2/2024, 9:05 am - Alice: pizza tonight?\n\
//! 1/2/2024, 9:06 am - Bob: sounds good\n\
//! 1/2/2024, 9:06 am - Bob: see you at 8";
//!
//! let messages = parse(export);
//! assert_eq!(messages.len(), 3);
//!
//! // Scope to one participant, then aggregate.
//! let bobs = apply_filters(messages, &FilterConfig::new().with_author("Bob"));
//! let stats = overview(&bobs);
//! assert_eq!(stats.messages, 2);
//! ```
//!
//! ## Full Report
//!
//! [`Report`](report::Report) bundles every aggregation for presentation
//! layers:
//!
//! ```rust
//! use chatlens::parser::parse;
//! use chatlens::report::{Report, ReportConfig};
//!
//! let messages = parse("1/2/2024, 9:05 am - Alice: Hello");
//! let report = Report::build(&messages, &ReportConfig::new());
//! assert_eq!(report.overview.messages, 1);
//! ```
//!
//! An empty parse result is a valid outcome, not an error; callers must
//! branch on it and show an explicit no-data state instead of rendering
//! statistics over nothing.
//!
//! ## Module Structure
//!
//! - [`parser`] — the line scanner converting export text into records
//!   - [`parse`](parser::parse), [`parse_with_outcome`](parser::parse_with_outcome)
//! - [`normalize`] — date/time token parsing shared by the scanner
//! - [`message`] — the [`Message`] record and derived calendar accessors
//! - [`stats`] — aggregation consumers (filter, overview, authors, words,
//!   links, emoji, activity)
//! - [`report`] — [`Report`](report::Report) assembly for display
//! - [`stopwords`] — shared read-only English stopword set
//! - [`error`] — [`ChatlensError`], [`Result`]
//! - [`cli`] — CLI argument types (behind the `cli` feature)

pub mod error;
pub mod message;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod stats;
pub mod stopwords;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{ParseOutcome, parse, parse_with_outcome};

    // Filtering
    pub use crate::stats::{FilterConfig, apply_filters};

    // Aggregations
    pub use crate::stats::{
        AuthorActivity, OverviewStats, author_list, busiest_authors, daily_timeline, extract_links,
        hourly_heatmap, link_count, monthly_activity, most_common_emojis, most_common_words,
        overview, total_emojis, weekday_activity,
    };

    // Report assembly
    pub use crate::report::{Report, ReportConfig};
}
