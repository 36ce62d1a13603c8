use std::path::PathBuf;

use crate::app_config::{AppConfig, PlurkCredentials, StoreConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load only the dedup-file settings, loading `.env` first.
///
/// Used by read-only commands that never touch the feed or Plurk.
#[must_use]
pub fn load_store_config() -> StoreConfig {
    dotenvy::dotenv().ok();
    build_store_config(|key| std::env::var(key))
}

fn build_store_config<F>(lookup: F) -> StoreConfig
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    StoreConfig {
        data_file: PathBuf::from(
            lookup("REELPOST_DATA_FILE").unwrap_or_else(|_| "posted_reviews.json".to_string()),
        ),
        log_level: lookup("REELPOST_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // Blank values are treated the same as unset ones.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let feed_url = require("LETTERBOXD_RSS_URL")?;
    let plurk = PlurkCredentials {
        api_key: require("PLURK_API_KEY")?,
        api_secret: require("PLURK_API_SECRET")?,
        access_token: require("PLURK_ACCESS_TOKEN")?,
        access_token_secret: require("PLURK_ACCESS_TOKEN_SECRET")?,
    };

    let plurk_base_url = or_default("PLURK_API_BASE_URL", "https://www.plurk.com");
    let StoreConfig {
        data_file,
        log_level,
    } = build_store_config(&lookup);
    let filter_current_year_only = parse_bool(
        "REELPOST_FILTER_CURRENT_YEAR",
        &or_default("REELPOST_FILTER_CURRENT_YEAR", "false"),
    )?;
    let hashtag = or_default("REELPOST_HASHTAG", "#letterboxd");
    let request_timeout_secs = parse_u64("REELPOST_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("REELPOST_USER_AGENT", "reelpost/0.1 (letterboxd-to-plurk)");

    Ok(AppConfig {
        feed_url,
        plurk,
        plurk_base_url,
        data_file,
        filter_current_year_only,
        hashtag,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a boolean flag. Accepts `true/false`, `1/0` and `yes/no`, case-insensitively.
fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
