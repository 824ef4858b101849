//! WhatsApp TXT export parser.
//!
//! Converts the raw export text into an ordered sequence of [`Message`]
//! records. This is the only part of the crate with nontrivial ambiguity:
//! exports mix well-formed message lines with system notices, multiline
//! bodies, and locale punctuation, and everything downstream is only as
//! good as the records produced here.
//!
//! # Line grammar
//!
//! A message line starts with a `D/M/YYYY` date, a comma, a 12-hour time
//! with an am/pm suffix (an ordinary or narrow no-break space may precede
//! the suffix), the literal ` - `, an author terminated by the first `": "`,
//! and the body:
//!
//! ```text
//! 1/2/2024, 9:05 am - Alice: Hello
//! ```
//!
//! # Scanner states
//!
//! A physical line that does not match the grammar is a *continuation* of
//! the previous message's body, so the scanner is an explicit two-state
//! machine rather than a single regex pass over the whole text:
//!
//! - `AwaitingMessage` — no message is open; non-matching lines are dropped.
//! - `Accumulating` — a message is open; non-matching lines are appended to
//!   its body with a `\n` separator.
//!
//! A start line that fails date/time validation (or has no `": "` author
//! separator) is dropped *and* closes the open message, so stray
//! continuation text is never attributed to the wrong author.
//!
//! # Failure semantics
//!
//! Parsing never fails. Real exports always contain noise — encryption
//! notices, group events — that does not match the message grammar, and
//! dropping it must not abort the whole parse. Callers that care about how
//! much was dropped can use [`parse_with_outcome`].
//!
//! # Example
//!
//! ```
//! use chatlens::parser::parse;
//!
//! let messages = parse("1/2/2024, 9:05 am - Alice: Hello");
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].author, "Alice");
//! assert_eq!(messages[0].body, "Hello");
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::Message;
use crate::normalize::{parse_date_token, parse_time_token};

/// Message-start grammar: date, comma, 12-hour time, ` - `, author and body.
///
/// The time group tolerates an ordinary space or a narrow no-break space
/// (U+202F) before the case-insensitive am/pm suffix. The trailing `(.+)`
/// captures author and body together; the `": "` split happens afterwards
/// so that a time-level mismatch and a missing author separator can be told
/// apart (the former makes the line a continuation, the latter drops it).
static MESSAGE_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{4}), (\d{1,2}:\d{2}[ \x{202F}]?[AaPp][Mm]) - (.+)$")
        .expect("message-start pattern is valid")
});

/// Result of a parse together with drop diagnostics.
///
/// Malformed lines are dropped by policy; the count makes that data loss
/// visible to callers that want it without changing the best-effort
/// contract of [`parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Successfully parsed messages, in input order.
    pub messages: Vec<Message>,

    /// Number of physical lines discarded: orphan continuations, start
    /// lines without an author separator, and lines whose date or time
    /// failed validation. Blank lines are ignored, not counted.
    pub dropped_lines: usize,
}

impl ParseOutcome {
    /// Returns `true` if no messages were recognized.
    ///
    /// An empty result is a valid outcome, not an error; presentation
    /// layers must branch on it and show an explicit no-data state.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Scanner state for the line-by-line pass.
enum ScanState {
    /// No message is open; continuation-looking lines have no home.
    AwaitingMessage,
    /// The most recently emitted message accepts continuation lines.
    Accumulating,
}

/// Parses a full chat export into messages, discarding malformed lines.
///
/// Pure function of the input text: no global state is read or written, so
/// independent exports may be parsed concurrently. An input with zero
/// recognizable message lines (including the empty string) yields an empty
/// vector, never an error.
pub fn parse(text: &str) -> Vec<Message> {
    parse_with_outcome(text).messages
}

/// Parses a full chat export, also reporting how many lines were dropped.
///
/// See the [module documentation](self) for the line grammar and the
/// drop policy.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse_with_outcome;
///
/// let text = "1/2/2024, 9:05 am - Alice: Hello\n\
///             1/2/2024, 9:06 am - Messages and calls are end-to-end encrypted.";
/// let outcome = parse_with_outcome(text);
/// assert_eq!(outcome.messages.len(), 1);
/// assert_eq!(outcome.dropped_lines, 1);
/// ```
pub fn parse_with_outcome(text: &str) -> ParseOutcome {
    let mut messages: Vec<Message> = Vec::new();
    let mut dropped_lines = 0usize;
    let mut state = ScanState::AwaitingMessage;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(caps) = MESSAGE_START.captures(line) else {
            // Continuation of the open message, or an orphan line.
            match state {
                ScanState::Accumulating => {
                    if let Some(last) = messages.last_mut() {
                        last.body.push('\n');
                        last.body.push_str(line);
                    }
                }
                ScanState::AwaitingMessage => dropped_lines += 1,
            }
            continue;
        };

        // Start line. From here on the line either becomes a message or is
        // dropped; either way the previously open message is closed.
        let date_token = caps.get(1).map_or("", |m| m.as_str());
        let time_token = caps.get(2).map_or("", |m| m.as_str());
        let rest = caps.get(3).map_or("", |m| m.as_str());

        let Some((author, body)) = split_author(rest) else {
            dropped_lines += 1;
            state = ScanState::AwaitingMessage;
            continue;
        };

        let (Some(date), Some((hour, minute))) =
            (parse_date_token(date_token), parse_time_token(time_token))
        else {
            dropped_lines += 1;
            state = ScanState::AwaitingMessage;
            continue;
        };

        messages.push(Message::new(date, hour, minute, author, body));
        state = ScanState::Accumulating;
    }

    ParseOutcome {
        messages,
        dropped_lines,
    }
}

/// Splits the post-dash remainder at the first `": "` into author and body.
///
/// Returns `None` when there is no separator (system notices take this
/// path) or when either side would be empty.
fn split_author(rest: &str) -> Option<(&str, &str)> {
    let (author, body) = rest.split_once(": ")?;
    let author = author.trim();
    if author.is_empty() || body.is_empty() {
        return None;
    }
    Some((author, body))
}
