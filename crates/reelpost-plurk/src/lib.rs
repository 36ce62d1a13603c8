//! Plurk publisher: formats reviews into plurks and posts them through the
//! OAuth1-signed `/APP/Timeline/plurkAdd` endpoint.

pub mod client;
pub mod content;
pub mod error;
mod oauth;
pub mod types;

pub use client::PlurkClient;
pub use content::{format_content, PLURK_MAX_LENGTH, QUALIFIER};
pub use error::PlurkError;
pub use types::AddPlurkResponse;
