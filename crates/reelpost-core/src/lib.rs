//! Shared configuration and data model for reelpost.

mod app_config;
mod config;
mod review;

pub use app_config::{AppConfig, PlurkCredentials, StoreConfig};
pub use config::{load_app_config, load_app_config_from_env, load_store_config};
pub use review::{ReviewRecord, RunSummary};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
