use anyhow::{bail, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for tracker-stats.
///
/// Loaded once at startup and passed into the pieces that need it; nothing
/// reads configuration ambiently after that.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrackerStatsConfig {
    /// Tracker API connection settings
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the tracker REST API, e.g. https://tuleap.example.com/api
    pub base_url: String,
    /// Personal access key, sent on every request
    pub access_key: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Skip TLS certificate verification (self-hosted instances with
    /// self-signed certificates). Off unless explicitly enabled.
    pub danger_accept_invalid_certs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            access_key: String::new(),
            timeout_seconds: 30,
            danger_accept_invalid_certs: false,
        }
    }
}

impl TrackerStatsConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Configuration file (tracker-stats.toml, or the path given on the
    ///    command line)
    /// 3. Environment variables (TRACKER_STATS_API__BASE_URL etc.; the
    ///    double underscore separates nesting levels)
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("api.base_url", "")?
            .set_default("api.access_key", "")?
            .set_default("api.timeout_seconds", 30_i64)?
            .set_default("api.danger_accept_invalid_certs", false)?;

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path));
            }
            None => {
                if Path::new("tracker-stats.toml").exists() {
                    builder = builder.add_source(File::with_name("tracker-stats"));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("TRACKER_STATS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut config: TrackerStatsConfig = builder.build()?.try_deserialize()?;

        // The access key is a secret; a bare env var beats putting it in a
        // checked-in file.
        if config.api.access_key.is_empty() {
            if let Ok(key) = std::env::var("TULEAP_ACCESS_KEY") {
                config.api.access_key = key;
            }
        }

        if config.api.base_url.is_empty() {
            bail!(
                "no API base URL configured: set api.base_url in tracker-stats.toml \
                 or export TRACKER_STATS_API__BASE_URL"
            );
        }

        Ok(config)
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}
