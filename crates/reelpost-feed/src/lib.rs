//! Letterboxd review feed fetcher -- downloads an RSS/Atom feed and maps its
//! entries to [`ReviewRecord`](reelpost_core::ReviewRecord)s.

pub mod client;
pub mod error;
pub mod parse;
mod pubdate;

pub use client::FeedClient;
pub use error::FeedError;
pub use parse::{parse_feed, YearFilter};
