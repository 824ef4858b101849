//! Most-common-word ranking.
//!
//! Placeholder bodies (media omitted, deleted messages) are excluded, URLs
//! are stripped before tokenizing, tokens are lowercased and trimmed of
//! ASCII punctuation at the edges, and stopwords are discarded. The result
//! is deterministic: count descending, then word ascending.

use std::collections::HashMap;

use crate::Message;
use crate::stats::links::strip_urls;
use crate::stopwords::is_stopword;

/// Returns the `top_n` most frequent content words with their counts.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse;
/// use chatlens::stats::most_common_words;
///
/// let messages = parse(
///     "1/2/2024, 9:05 am - Alice: pizza tonight?\n\
///      1/2/2024, 9:06 am - Bob: pizza sounds good",
/// );
/// let top = most_common_words(&messages, 1);
/// assert_eq!(top, vec![("pizza".to_string(), 2)]);
/// ```
pub fn most_common_words(messages: &[Message], top_n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for msg in messages {
        if msg.is_media() || msg.is_deleted() {
            continue;
        }
        let cleaned = strip_urls(&msg.body);
        for token in cleaned.to_lowercase().split_whitespace() {
            let word = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if word.is_empty() || is_stopword(word) {
                continue;
            }
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);
    ranked
}

/// Counts whitespace-separated tokens across all bodies, placeholders
/// included.
pub(crate) fn total_words(messages: &[Message]) -> usize {
    messages
        .iter()
        .map(|msg| msg.body.split_whitespace().count())
        .sum()
}
