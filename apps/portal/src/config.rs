use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://localhost:8084";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Portal configuration loaded from environment variables.
/// Every variable is optional; defaults point at a local backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    /// Overrides for the placeholder identity sent with applications.
    pub candidate_name: Option<String>,
    pub candidate_email: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout_secs = match lookup("PORTAL_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().with_context(|| {
                format!("PORTAL_TIMEOUT_SECS must be a number of seconds, got '{raw}'")
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_url: lookup("PORTAL_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
            candidate_name: lookup("PORTAL_CANDIDATE_NAME"),
            candidate_email: lookup("PORTAL_CANDIDATE_EMAIL"),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
