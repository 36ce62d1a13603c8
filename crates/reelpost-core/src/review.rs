use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry parsed from the review feed.
///
/// `id` is the feed-provided guid and the only key used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub title: String,
    pub link: String,
    pub description: String,
    pub published: String,
    pub id: String,
}

/// Outcome of a single sync run, printed as JSON when the run finishes.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub new_reviews_posted: usize,
    pub newly_posted: Vec<ReviewRecord>,
    pub total_posted: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub dry_run: bool,
}

impl RunSummary {
    #[must_use]
    pub fn new(newly_posted: Vec<ReviewRecord>, total_posted: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            new_reviews_posted: newly_posted.len(),
            newly_posted,
            total_posted,
            dry_run: false,
        }
    }
}
