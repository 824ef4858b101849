//! Emoji frequency over message bodies.
//!
//! Emoji detection is a fixed set of Unicode code-point ranges covering
//! emoticons, pictographs, transport symbols, regional indicators,
//! dingbats, and supplemental symbols. Each matching code point is counted
//! individually, so `"😀😀"` contributes two occurrences of `😀`.

use std::collections::HashMap;

use crate::Message;

/// Returns `true` if the character falls in one of the emoji ranges.
pub fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{1F300}'..='\u{1F5FF}'   // symbols & pictographs
        | '\u{1F600}'..='\u{1F64F}' // emoticons
        | '\u{1F680}'..='\u{1F6FF}' // transport & map symbols
        | '\u{1F1E0}'..='\u{1F1FF}' // regional indicators (flags)
        | '\u{2700}'..='\u{27BF}'   // dingbats
        | '\u{1F900}'..='\u{1F9FF}' // supplemental symbols & pictographs
    )
}

/// Counts all emoji occurrences across the given messages.
pub fn total_emojis(messages: &[Message]) -> usize {
    messages
        .iter()
        .map(|msg| msg.body.chars().filter(|&c| is_emoji(c)).count())
        .sum()
}

/// Returns the `top_n` most frequent emojis with their counts.
///
/// Order is count descending; ties break on code point for a deterministic
/// result.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse;
/// use chatlens::stats::most_common_emojis;
///
/// let messages = parse("1/2/2024, 9:05 am - Alice: nice 😂😂🔥");
/// assert_eq!(most_common_emojis(&messages, 10), vec![('😂', 2), ('🔥', 1)]);
/// ```
pub fn most_common_emojis(messages: &[Message], top_n: usize) -> Vec<(char, usize)> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for msg in messages {
        for c in msg.body.chars().filter(|&c| is_emoji(c)) {
            *counts.entry(c).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(char, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(top_n);
    ranked
}
