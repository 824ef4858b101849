//! The parsed chat message record.
//!
//! This module provides [`Message`], the structured representation of one
//! message from a WhatsApp text export. The parser emits these in input
//! order; every downstream statistic is an aggregation over them.
//!
//! # Overview
//!
//! A message carries the four fields captured from the export line:
//! - `date` — calendar date of the message
//! - `hour` / `minute` — time of day, already converted to a 24-hour clock
//! - `author` — sender name (text before the first `": "` separator)
//! - `body` — message text; multiline bodies are joined with `\n`
//!
//! Calendar views (year, month name, weekday name) are derived on demand
//! from `date` and are fixed to English names regardless of process locale.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let msg = Message::new(
//!     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
//!     21,
//!     5,
//!     "Alice",
//!     "Hello!",
//! );
//!
//! assert_eq!(msg.year(), 2024);
//! assert_eq!(msg.month_name(), "February");
//! assert_eq!(msg.weekday_name(), "Thursday");
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Placeholder body WhatsApp inserts for attachments excluded from the export.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Placeholder body WhatsApp inserts for messages deleted by their sender.
pub const DELETED_PLACEHOLDER: &str = "This message was deleted";

/// A single parsed message from a WhatsApp text export.
///
/// Instances are produced by [`parse`](crate::parser::parse) and are never
/// mutated afterwards, except for continuation lines folded into `body`
/// during the same parse pass. Records preserve export order.
///
/// # Serialization
///
/// Implements `Serialize` and `Deserialize`; `date` uses chrono's ISO 8601
/// representation (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Calendar date the message was sent.
    pub date: NaiveDate,

    /// Hour of day on a 24-hour clock (0–23).
    pub hour: u32,

    /// Minute within the hour (0–59).
    pub minute: u32,

    /// Sender name as it appears in the export, surrounding whitespace trimmed.
    pub author: String,

    /// Message text.
    ///
    /// May contain newlines for multiline messages, or a placeholder such as
    /// [`MEDIA_PLACEHOLDER`] for content omitted from the export.
    pub body: String,
}

impl Message {
    /// Creates a message record with all fields populated.
    pub fn new(
        date: NaiveDate,
        hour: u32,
        minute: u32,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            date,
            hour,
            minute,
            author: author.into(),
            body: body.into(),
        }
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the day of month (1–31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns the English month name ("January" … "December").
    ///
    /// Fixed calendar locale; does not consult process locale settings.
    pub fn month_name(&self) -> &'static str {
        month_name(self.date.month0() as usize)
    }

    /// Returns the English weekday name ("Monday" … "Sunday").
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.date.weekday())
    }

    /// Returns `true` if the body is the media-omitted placeholder.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_PLACEHOLDER
    }

    /// Returns `true` if the body is the deleted-message placeholder.
    pub fn is_deleted(&self) -> bool {
        self.body == DELETED_PLACEHOLDER
    }

    /// Renders the message back into the single-line export form.
    ///
    /// The result uses an unpadded day/month, an ordinary space before the
    /// lowercase am/pm suffix, and a multiline body keeps its embedded
    /// newlines. Feeding the result back through the parser recovers the
    /// same structured fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatlens::Message;
    /// use chrono::NaiveDate;
    ///
    /// let msg = Message::new(
    ///     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    ///     21,
    ///     5,
    ///     "Bob",
    ///     "Hi",
    /// );
    /// assert_eq!(msg.to_export_line(), "1/2/2024, 9:05 pm - Bob: Hi");
    /// ```
    pub fn to_export_line(&self) -> String {
        let (clock_hour, suffix) = match self.hour {
            0 => (12, "am"),
            1..=11 => (self.hour, "am"),
            12 => (12, "pm"),
            _ => (self.hour - 12, "pm"),
        };
        format!(
            "{}/{}/{}, {}:{:02} {} - {}: {}",
            self.date.day(),
            self.date.month(),
            self.date.year(),
            clock_hour,
            self.minute,
            suffix,
            self.author,
            self.body
        )
    }
}

/// English month name for a zero-based month index.
pub(crate) fn month_name(month0: usize) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTHS[month0]
}

/// English weekday name, fixed locale.
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
