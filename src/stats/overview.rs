//! Headline totals for a record set.

use serde::Serialize;

use crate::Message;
use crate::stats::emoji::total_emojis;
use crate::stats::links::link_count;
use crate::stats::words::total_words;

/// Headline totals over a (possibly pre-filtered) message set.
///
/// Word counts include placeholder bodies; media and deleted counts are
/// exact placeholder matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    /// Total number of messages.
    pub messages: usize,
    /// Whitespace-separated tokens across all bodies.
    pub words: usize,
    /// Messages whose body is the media-omitted placeholder.
    pub media: usize,
    /// Messages whose body is the deleted-message placeholder.
    pub deleted: usize,
    /// URLs found across all bodies.
    pub links: usize,
    /// Emoji occurrences across all bodies.
    pub emojis: usize,
}

/// Computes the headline totals for the given messages.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse;
/// use chatlens::stats::overview;
///
/// let messages = parse(
///     "1/2/2024, 9:05 am - Alice: Hello there\n\
///      1/2/2024, 9:06 am - Bob: <Media omitted>",
/// );
/// let stats = overview(&messages);
/// assert_eq!(stats.messages, 2);
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.media, 1);
/// ```
pub fn overview(messages: &[Message]) -> OverviewStats {
    OverviewStats {
        messages: messages.len(),
        words: total_words(messages),
        media: messages.iter().filter(|m| m.is_media()).count(),
        deleted: messages.iter().filter(|m| m.is_deleted()).count(),
        links: link_count(messages),
        emojis: total_emojis(messages),
    }
}
