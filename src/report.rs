//! Full report assembly.
//!
//! Bundles every aggregation into one [`Report`] value, the shape the CLI
//! renders as text or JSON. Library users composing their own views can
//! call the individual `stats` functions directly instead.

use chrono::NaiveDate;
use serde::Serialize;

use crate::Message;
use crate::stats::{
    AuthorActivity, OverviewStats, busiest_authors, daily_timeline, extract_links,
    hourly_heatmap, monthly_activity, most_common_emojis, most_common_words, overview,
    weekday_activity,
};

/// How many entries each ranked section of the report keeps.
///
/// # Example
///
/// ```
/// use chatlens::report::ReportConfig;
///
/// let config = ReportConfig::new().with_top_words(10).with_top_emojis(5);
/// assert_eq!(config.top_words, 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// Entries in the most-common-words ranking.
    pub top_words: usize,
    /// Entries in the emoji ranking.
    pub top_emojis: usize,
    /// Entries in the busiest-authors ranking.
    pub top_authors: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            top_emojis: 10,
            top_authors: 5,
        }
    }
}

impl ReportConfig {
    /// Creates a configuration with the default section sizes (20/10/5).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the most-common-words section size.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the emoji section size.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the busiest-authors section size.
    #[must_use]
    pub fn with_top_authors(mut self, n: usize) -> Self {
        self.top_authors = n;
        self
    }
}

/// Every aggregation over one (possibly pre-filtered) message set.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Headline totals.
    pub overview: OverviewStats,
    /// Participants ranked by message count.
    pub busiest_authors: Vec<AuthorActivity>,
    /// Most frequent content words with counts.
    pub top_words: Vec<(String, usize)>,
    /// Most frequent emojis with counts.
    pub top_emojis: Vec<(char, usize)>,
    /// Every URL found, in input order.
    pub links: Vec<String>,
    /// Per-date message counts, ascending.
    pub daily_timeline: Vec<(NaiveDate, usize)>,
    /// Per-month-name message counts, calendar order.
    pub monthly_activity: Vec<(&'static str, usize)>,
    /// Per-weekday message counts, Monday-first.
    pub weekday_activity: Vec<(&'static str, usize)>,
    /// Message counts per `(weekday, hour)` cell, Monday-first rows.
    pub hourly_heatmap: [[usize; 24]; 7],
}

impl Report {
    /// Builds the full report over the given messages.
    ///
    /// # Example
    ///
    /// ```
    /// use chatlens::parser::parse;
    /// use chatlens::report::{Report, ReportConfig};
    ///
    /// let messages = parse("1/2/2024, 9:05 am - Alice: Hello");
    /// let report = Report::build(&messages, &ReportConfig::new());
    /// assert_eq!(report.overview.messages, 1);
    /// ```
    pub fn build(messages: &[Message], config: &ReportConfig) -> Self {
        Self {
            overview: overview(messages),
            busiest_authors: busiest_authors(messages, config.top_authors),
            top_words: most_common_words(messages, config.top_words),
            top_emojis: most_common_emojis(messages, config.top_emojis),
            links: extract_links(messages),
            daily_timeline: daily_timeline(messages),
            monthly_activity: monthly_activity(messages),
            weekday_activity: weekday_activity(messages).to_vec(),
            hourly_heatmap: hourly_heatmap(messages),
        }
    }
}
