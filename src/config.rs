//! Application configuration loaded from environment variables.

use chrono::NaiveDate;
use std::env;

/// Campaign start date used when `RAMADAN_START_DATE` is not set.
/// Ramadan 2025 is expected to start around March 1 (may vary by location).
const DEFAULT_RAMADAN_START: &str = "2025-03-01";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// First day of the 30-day generation run
    pub ramadan_start: NaiveDate,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let raw_start =
            env::var("RAMADAN_START_DATE").unwrap_or_else(|_| DEFAULT_RAMADAN_START.to_string());
        let ramadan_start = raw_start
            .parse()
            .map_err(|_| ConfigError::Invalid("RAMADAN_START_DATE", raw_start))?;

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            ramadan_start,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            ramadan_start: NaiveDate::from_ymd_opt(2025, 3, 1)
                .expect("default start date is valid"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
