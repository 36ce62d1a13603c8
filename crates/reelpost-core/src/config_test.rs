use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("LETTERBOXD_RSS_URL", "https://letterboxd.com/someone/rss/");
    m.insert("PLURK_API_KEY", "key");
    m.insert("PLURK_API_SECRET", "secret");
    m.insert("PLURK_ACCESS_TOKEN", "token");
    m.insert("PLURK_ACCESS_TOKEN_SECRET", "token-secret");
    m
}

#[test]
fn build_app_config_fails_without_feed_url() {
    let mut map = full_env();
    map.remove("LETTERBOXD_RSS_URL");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "LETTERBOXD_RSS_URL"),
        "expected MissingEnvVar(LETTERBOXD_RSS_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_feed_url_as_missing() {
    let mut map = full_env();
    map.insert("LETTERBOXD_RSS_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "LETTERBOXD_RSS_URL"),
        "expected MissingEnvVar(LETTERBOXD_RSS_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_each_missing_credential() {
    for var in [
        "PLURK_API_KEY",
        "PLURK_API_SECRET",
        "PLURK_ACCESS_TOKEN",
        "PLURK_ACCESS_TOKEN_SECRET",
    ] {
        let mut map = full_env();
        map.remove(var);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == var),
            "expected MissingEnvVar({var}), got: {result:?}"
        );
    }
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.feed_url, "https://letterboxd.com/someone/rss/");
    assert_eq!(cfg.plurk.api_key, "key");
    assert_eq!(cfg.plurk.access_token_secret, "token-secret");
    assert_eq!(cfg.plurk_base_url, "https://www.plurk.com");
    assert_eq!(cfg.data_file.to_str(), Some("posted_reviews.json"));
    assert!(!cfg.filter_current_year_only);
    assert_eq!(cfg.hashtag, "#letterboxd");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "reelpost/0.1 (letterboxd-to-plurk)");
}

#[test]
fn filter_current_year_accepts_common_spellings() {
    for (raw, expected) in [
        ("true", true),
        ("TRUE", true),
        ("1", true),
        ("yes", true),
        ("false", false),
        ("0", false),
        ("no", false),
    ] {
        let mut map = full_env();
        map.insert("REELPOST_FILTER_CURRENT_YEAR", raw);
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.filter_current_year_only, expected, "raw value {raw:?}");
    }
}

#[test]
fn filter_current_year_rejects_garbage() {
    let mut map = full_env();
    map.insert("REELPOST_FILTER_CURRENT_YEAR", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REELPOST_FILTER_CURRENT_YEAR"),
        "expected InvalidEnvVar(REELPOST_FILTER_CURRENT_YEAR), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_override() {
    let mut map = full_env();
    map.insert("REELPOST_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = full_env();
    map.insert("REELPOST_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "REELPOST_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(REELPOST_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn hashtag_and_data_file_overrides() {
    let mut map = full_env();
    map.insert("REELPOST_HASHTAG", "#films");
    map.insert("REELPOST_DATA_FILE", "/var/lib/reelpost/state.json");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.hashtag, "#films");
    assert_eq!(cfg.data_file.to_str(), Some("/var/lib/reelpost/state.json"));
}

#[test]
fn debug_output_redacts_secrets() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("token-secret"), "leaked: {rendered}");
    assert!(!rendered.contains("\"secret\""), "leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn build_store_config_needs_no_credentials() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_store_config(lookup_from_map(&map));
    assert_eq!(cfg.data_file, std::path::PathBuf::from("posted_reviews.json"));
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_store_config_matches_app_config_overrides() {
    let mut map = full_env();
    map.insert("REELPOST_DATA_FILE", "/var/lib/reelpost/posted.json");
    map.insert("REELPOST_LOG_LEVEL", "debug");
    let store = build_store_config(lookup_from_map(&map));
    let app = build_app_config(lookup_from_map(&map)).expect("valid config");
    assert_eq!(store.data_file, app.data_file);
    assert_eq!(store.log_level, app.log_level);
    assert_eq!(
        store.data_file,
        std::path::PathBuf::from("/var/lib/reelpost/posted.json")
    );
}
