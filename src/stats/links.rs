//! URL extraction from message bodies.
//!
//! The matcher is deliberately loose (`https?://` followed by non-space
//! text): export bodies are free text and link counts only need to agree
//! with what a reader would call a link.

use std::sync::LazyLock;

use regex::Regex;

use crate::Message;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

/// Extracts every URL from the given messages, in input order.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse;
/// use chatlens::stats::extract_links;
///
/// let messages = parse("1/2/2024, 9:05 am - Alice: see https://example.com/a");
/// assert_eq!(extract_links(&messages), vec!["https://example.com/a"]);
/// ```
pub fn extract_links(messages: &[Message]) -> Vec<String> {
    messages
        .iter()
        .flat_map(|msg| {
            URL_PATTERN
                .find_iter(&msg.body)
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

/// Counts URLs across the given messages.
pub fn link_count(messages: &[Message]) -> usize {
    messages
        .iter()
        .map(|msg| URL_PATTERN.find_iter(&msg.body).count())
        .sum()
}

/// Removes every URL from a body, for word counting.
pub(crate) fn strip_urls(body: &str) -> String {
    URL_PATTERN.replace_all(body, "").into_owned()
}
