//! HTTP client for the Plurk API.
//!
//! Wraps `reqwest` with OAuth1 signing and Plurk-specific error handling.
//! Every request is a single attempt; callers decide what to do on failure.

use std::time::Duration;

use reelpost_core::{AppConfig, PlurkCredentials, ReviewRecord};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};

use crate::content::{format_content, PLURK_MAX_LENGTH, QUALIFIER};
use crate::error::PlurkError;
use crate::oauth::{authorization_header, form_body, Stamp};
use crate::types::{AddPlurkResponse, ErrorBody};

const PLURK_ADD_PATH: &str = "APP/Timeline/plurkAdd";

/// Client for posting review plurks.
///
/// Use [`PlurkClient::from_config`] in the binary or
/// [`PlurkClient::with_base_url`] to point at a mock server in tests.
pub struct PlurkClient {
    client: Client,
    credentials: PlurkCredentials,
    endpoint: Url,
    hashtag: String,
}

impl PlurkClient {
    /// Creates a client from the application config, honouring
    /// `plurk_base_url`.
    ///
    /// # Errors
    ///
    /// See [`PlurkClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, PlurkError> {
        Self::with_base_url(
            config.plurk.clone(),
            &config.hashtag,
            config.request_timeout_secs,
            &config.user_agent,
            &config.plurk_base_url,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlurkError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlurkError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        credentials: PlurkCredentials,
        hashtag: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlurkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(PLURK_ADD_PATH))
            .map_err(|e| PlurkError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            credentials,
            endpoint,
            hashtag: hashtag.to_owned(),
        })
    }

    /// The fully-qualified `plurkAdd` URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Formats `review` with the configured hashtag and the Plurk length limit.
    #[must_use]
    pub fn render(&self, review: &ReviewRecord) -> String {
        format_content(review, &self.hashtag, PLURK_MAX_LENGTH)
    }

    /// Formats and posts one review.
    ///
    /// # Errors
    ///
    /// See [`PlurkClient::add_plurk`].
    pub async fn publish(&self, review: &ReviewRecord) -> Result<AddPlurkResponse, PlurkError> {
        let content = self.render(review);
        let response = self.add_plurk(&content).await?;
        tracing::info!(
            review_id = %review.id,
            title = %review.title,
            plurk_id = ?response.plurk_id,
            "posted review to Plurk"
        );
        Ok(response)
    }

    /// Posts `content` with the `watches` qualifier and no audience
    /// restriction.
    ///
    /// # Errors
    ///
    /// - [`PlurkError::Http`] on network failure.
    /// - [`PlurkError::Api`] when Plurk answers non-2xx with an `error_text`.
    /// - [`PlurkError::UnexpectedStatus`] for any other non-2xx response.
    pub async fn add_plurk(&self, content: &str) -> Result<AddPlurkResponse, PlurkError> {
        let form = [("content", content), ("qualifier", QUALIFIER)];
        let auth = authorization_header(
            "POST",
            &self.endpoint,
            &form,
            &self.credentials,
            &Stamp::now(),
        )?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, auth)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form_body(&form))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<ErrorBody>(&body) {
                Ok(err) => PlurkError::Api {
                    status: status.as_u16(),
                    message: err.error_text,
                },
                Err(_) => PlurkError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: self.endpoint.to_string(),
                },
            });
        }

        // A 2xx is a successful post even if the body isn't the shape we expect.
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
