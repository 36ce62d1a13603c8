use std::time::Duration;

use reelpost_core::ReviewRecord;
use reqwest::Client;

use crate::error::FeedError;
use crate::parse::{parse_feed, YearFilter};

/// HTTP client for the review feed.
///
/// One GET per run; non-2xx responses are surfaced as
/// [`FeedError::UnexpectedStatus`] and never retried.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a new feed client.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `feed_url` and parses every entry into a [`ReviewRecord`].
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] on network failure.
    /// - [`FeedError::UnexpectedStatus`] on a non-2xx response.
    /// - [`FeedError::Parse`] / [`FeedError::MissingField`] on a malformed feed.
    pub async fn fetch_reviews(
        &self,
        feed_url: &str,
        filter: YearFilter,
    ) -> Result<Vec<ReviewRecord>, FeedError> {
        tracing::info!(feed_url, "fetching reviews");

        let response = self.client.get(feed_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: feed_url.to_owned(),
            });
        }

        let bytes = response.bytes().await?;
        let records = parse_feed(&bytes, filter)?;

        tracing::info!(count = records.len(), "found reviews in the feed");
        Ok(records)
    }
}
