//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - Report output format options

use clap::{Parser, ValueEnum};

/// Analyze a WhatsApp chat export: message counts, busiest participants,
/// common words, emoji frequency, and activity timelines.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens whatsapp_chat.txt
    chatlens chat.txt --author Alice
    chatlens chat.txt --after 2024-01-01 --before 2024-06-30
    chatlens chat.txt --format json > report.json")]
pub struct Args {
    /// Path to the exported chat text file
    pub input: String,

    /// Restrict the report to one participant
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Only include messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only include messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Number of entries in the most-common-words section
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Number of entries in the emoji section
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_emojis: usize,

    /// Number of entries in the busiest-participants section
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_authors: usize,

    /// Report output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

/// Report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable sections on stdout
    Text,

    /// The full report as pretty-printed JSON
    #[cfg(feature = "json-output")]
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            #[cfg(feature = "json-output")]
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
