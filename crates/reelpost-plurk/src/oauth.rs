//! OAuth 1.0a request signing (HMAC-SHA1), as required by the Plurk API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distr::Alphanumeric;
use rand::Rng;
use reelpost_core::PlurkCredentials;
use reqwest::Url;
use sha1::Sha1;

use crate::error::PlurkError;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters are left alone; everything else is encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// Per-request nonce and timestamp.
pub(crate) struct Stamp {
    pub(crate) nonce: String,
    pub(crate) timestamp: i64,
}

impl Stamp {
    pub(crate) fn now() -> Self {
        let nonce = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        Self {
            nonce,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Encodes `form` as an `application/x-www-form-urlencoded` body using the
/// same encoding the signature is computed over.
pub(crate) fn form_body(form: &[(&str, &str)]) -> String {
    form.iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the `Authorization: OAuth ...` header value for a request.
pub(crate) fn authorization_header(
    method: &str,
    url: &Url,
    form: &[(&str, &str)],
    credentials: &PlurkCredentials,
    stamp: &Stamp,
) -> Result<String, PlurkError> {
    let timestamp = stamp.timestamp.to_string();
    let mut oauth_params = vec![
        ("oauth_consumer_key", credentials.api_key.as_str()),
        ("oauth_nonce", stamp.nonce.as_str()),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];

    let base = signature_base_string(method, url, &oauth_params, form);
    let signature = sign(
        &base,
        &credentials.api_secret,
        &credentials.access_token_secret,
    )?;
    oauth_params.push(("oauth_signature", signature.as_str()));
    oauth_params.sort_unstable();

    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("OAuth {fields}"))
}

/// `METHOD&encoded(base_url)&encoded(sorted params)`.
///
/// Query parameters on `url` are folded into the parameter set and stripped
/// from the base URL.
fn signature_base_string(
    method: &str,
    url: &Url,
    oauth_params: &[(&str, &str)],
    form: &[(&str, &str)],
) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode(&k), encode(&v)))
        .chain(
            oauth_params
                .iter()
                .chain(form.iter())
                .map(|(k, v)| (encode(k), encode(v))),
        )
        .collect();
    params.sort();

    let param_string = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(base_url.as_str()),
        encode(&param_string)
    )
}

fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> Result<String, PlurkError> {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| PlurkError::Signing(e.to_string()))?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
