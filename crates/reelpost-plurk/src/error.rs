use thiserror::Error;

/// Errors returned by the Plurk API client.
#[derive(Debug, Error)]
pub enum PlurkError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Plurk rejected the request and explained why in `error_text`.
    #[error("Plurk API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Non-2xx response without a recognisable error body.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("request signing failed: {0}")]
    Signing(String),
}
