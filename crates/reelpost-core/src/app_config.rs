use std::path::PathBuf;

/// OAuth1 credentials for the Plurk API. All four are required.
#[derive(Clone)]
pub struct PlurkCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl std::fmt::Debug for PlurkCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlurkCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[redacted]")
            .field("access_token", &"[redacted]")
            .field("access_token_secret", &"[redacted]")
            .finish()
    }
}

/// The subset of configuration needed to read the dedup file. Loading it does
/// not require the feed URL or any Plurk credential.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_file: PathBuf,
    pub log_level: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub feed_url: String,
    pub plurk: PlurkCredentials,
    pub plurk_base_url: String,
    pub data_file: PathBuf,
    pub filter_current_year_only: bool,
    pub hashtag: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("feed_url", &self.feed_url)
            .field("plurk", &self.plurk)
            .field("plurk_base_url", &self.plurk_base_url)
            .field("data_file", &self.data_file)
            .field("filter_current_year_only", &self.filter_current_year_only)
            .field("hashtag", &self.hashtag)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
