//! Mapping from parsed `feed-rs` entries to [`ReviewRecord`]s.

use chrono::{DateTime, Datelike, Utc};
use feed_rs::model::Entry;
use reelpost_core::ReviewRecord;

use crate::error::FeedError;
use crate::pubdate::raw_publish_dates;

/// Which entries survive parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    /// Keep every entry.
    All,
    /// Keep only entries published (or updated) in the given calendar year.
    /// Entries without a date are dropped.
    Year(i32),
}

impl YearFilter {
    /// Build a filter from the `filter_current_year_only` config flag, using
    /// the current UTC year.
    #[must_use]
    pub fn from_flag(current_year_only: bool) -> Self {
        if current_year_only {
            Self::Year(Utc::now().year())
        } else {
            Self::All
        }
    }

    fn keeps(self, published: Option<DateTime<Utc>>) -> bool {
        match self {
            Self::All => true,
            Self::Year(year) => published.is_some_and(|dt| dt.year() == year),
        }
    }
}

/// Parse a feed document into review records, preserving feed order.
///
/// Title, link and id are required on every entry and passed through as-is;
/// entries without a `<guid>`/`<id>` are rejected rather than given a
/// synthesized id. Description falls back to the entry content body, then to
/// empty. The publish date is the feed's own text, or empty when absent.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] if the document is not a valid RSS/Atom/JSON
/// feed, or [`FeedError::MissingField`] if an entry lacks a required field.
pub fn parse_feed(bytes: &[u8], filter: YearFilter) -> Result<Vec<ReviewRecord>, FeedError> {
    let parser = feed_rs::parser::Builder::new()
        .id_generator(|_, _, _| String::new())
        .sanitize_content(false)
        .build();
    let feed = parser.parse(bytes)?;

    let raw_dates = raw_publish_dates(bytes)
        .filter(|dates| dates.len() == feed.entries.len())
        .unwrap_or_default();

    let mut records = Vec::with_capacity(feed.entries.len());
    for (index, entry) in feed.entries.into_iter().enumerate() {
        let published = entry.published.or(entry.updated);
        if !filter.keeps(published) {
            tracing::debug!(entry_id = %entry.id, "skipping entry outside year filter");
            continue;
        }
        let published_text = raw_dates
            .get(index)
            .cloned()
            .flatten()
            .or_else(|| entry.published.map(|dt| dt.to_rfc2822()))
            .unwrap_or_default();
        records.push(entry_to_record(entry, published_text)?);
    }

    Ok(records)
}

fn entry_to_record(entry: Entry, published: String) -> Result<ReviewRecord, FeedError> {
    let missing = |field: &'static str| FeedError::MissingField {
        entry_id: entry.id.clone(),
        field,
    };

    if entry.id.is_empty() {
        return Err(missing("id"));
    }

    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.clone())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| missing("title"))?;

    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .filter(|href| !href.is_empty())
        .ok_or_else(|| missing("link"))?;

    let description = entry
        .summary
        .as_ref()
        .map(|s| s.content.clone())
        .or_else(|| entry.content.as_ref().and_then(|c| c.body.clone()))
        .unwrap_or_default();

    Ok(ReviewRecord {
        title,
        link,
        description,
        published,
        id: entry.id,
    })
}
