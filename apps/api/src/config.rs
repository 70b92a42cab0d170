use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only the listener settings are required; the Gemini key is optional and
/// its absence selects the local scorer.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub remote_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            remote_timeout_secs: std::env::var("REMOTE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("REMOTE_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Upper bound on a single remote generation call.
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }
}

/// Reads an env var, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_timeout_converts_seconds() {
        let config = Config {
            gemini_api_key: None,
            remote_timeout_secs: 12,
            port: 8080,
            rust_log: "info".to_string(),
        };
        assert_eq!(config.remote_timeout(), Duration::from_secs(12));
    }

    #[test]
    fn test_optional_env_blank_is_absent() {
        std::env::set_var("RECRUIT_MATCH_TEST_BLANK", "   ");
        assert_eq!(optional_env("RECRUIT_MATCH_TEST_BLANK"), None);
        std::env::remove_var("RECRUIT_MATCH_TEST_BLANK");
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("RECRUIT_MATCH_TEST_KEY", " abc123 ");
        assert_eq!(
            optional_env("RECRUIT_MATCH_TEST_KEY"),
            Some("abc123".to_string())
        );
        std::env::remove_var("RECRUIT_MATCH_TEST_KEY");
    }
}
