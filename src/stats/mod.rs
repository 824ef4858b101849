//! Aggregations over the parsed message sequence.
//!
//! Everything in this module is a straightforward consumer of the records
//! produced by [`parser`](crate::parser): counting, grouping, and ranking
//! over already-clean structured data.
//!
//! - [`filter`] — scope a record set to one author and/or a date range
//! - [`overview`] — message/word/media/deleted/link/emoji totals
//! - [`authors`] — busiest participants
//! - [`words`] — most common words (stopword and URL aware)
//! - [`links`] — URL extraction
//! - [`emoji`] — emoji frequency
//! - [`activity`] — daily/monthly/weekday timelines and the hour heatmap
//!
//! Per-author views are the caller's composition: filter first, then
//! aggregate.
//!
//! ```
//! use chatlens::parser::parse;
//! use chatlens::stats::{FilterConfig, apply_filters, weekday_activity};
//!
//! let messages = parse("1/2/2024, 9:05 am - Alice: Hello");
//! let alices = apply_filters(messages, &FilterConfig::new().with_author("Alice"));
//! let by_weekday = weekday_activity(&alices);
//! ```

pub mod activity;
pub mod authors;
pub mod emoji;
pub mod filter;
pub mod links;
pub mod overview;
pub mod words;

pub use activity::{daily_timeline, hourly_heatmap, monthly_activity, weekday_activity};
pub use authors::{AuthorActivity, author_list, busiest_authors};
pub use emoji::{most_common_emojis, total_emojis};
pub use filter::{FilterConfig, apply_filters};
pub use links::{extract_links, link_count};
pub use overview::{OverviewStats, overview};
pub use words::most_common_words;
