//! Participant rankings.

use std::collections::HashMap;

use serde::Serialize;

use crate::Message;

/// One participant's share of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorActivity {
    /// Author name as it appears in the export.
    pub author: String,
    /// Number of messages from this author.
    pub messages: usize,
    /// Share of the total message count, rounded to two decimals.
    pub percent: f64,
}

/// Ranks participants by message count, busiest first.
///
/// Ties break on author name for a deterministic result. Percentages are
/// relative to the full input, so the returned slice's percentages do not
/// necessarily sum to 100 when `top_n` cuts the list short.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse;
/// use chatlens::stats::busiest_authors;
///
/// let messages = parse(
///     "1/2/2024, 9:05 am - Alice: one\n\
///      1/2/2024, 9:06 am - Alice: two\n\
///      1/2/2024, 9:07 am - Bob: three\n\
///      1/2/2024, 9:08 am - Alice: four",
/// );
/// let ranked = busiest_authors(&messages, 5);
/// assert_eq!(ranked[0].author, "Alice");
/// assert_eq!(ranked[0].messages, 3);
/// assert_eq!(ranked[0].percent, 75.0);
/// ```
pub fn busiest_authors(messages: &[Message], top_n: usize) -> Vec<AuthorActivity> {
    let total = messages.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for msg in messages {
        *counts.entry(msg.author.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<AuthorActivity> = counts
        .into_iter()
        .map(|(author, count)| AuthorActivity {
            author: author.to_string(),
            messages: count,
            percent: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();

    ranked.sort_by(|a, b| b.messages.cmp(&a.messages).then_with(|| a.author.cmp(&b.author)));
    ranked.truncate(top_n);
    ranked
}

/// Returns the sorted list of distinct authors.
///
/// Presentation layers use this to offer a per-author selection next to the
/// overall view.
pub fn author_list(messages: &[Message]) -> Vec<String> {
    let mut authors: Vec<String> = messages.iter().map(|m| m.author.clone()).collect();
    authors.sort();
    authors.dedup();
    authors
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
