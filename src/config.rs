//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; there is no runtime reloading.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID identifying the Firestore database
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Directory of static assets served at the root path
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `GCP_PROJECT_ID` is required; the service cannot reach its store
    /// without it. `PORT` and `STATIC_DIR` have defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 3000,
            static_dir: "public".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
