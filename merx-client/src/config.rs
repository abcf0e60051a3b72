//! Environment-driven project configuration.
//!
//! The CLI builds two of these, one per project side:
//! `MERX_SOURCE_API_URL` / `MERX_SOURCE_PROJECT_KEY` / `MERX_SOURCE_API_TOKEN`
//! and the `MERX_TARGET_*` counterparts. Partial configuration fails fast
//! with the name of the first missing variable.

use std::time::Duration;

use crate::error::ClientError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for one commerce project.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub project_key: String,
    pub api_token: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        project_key: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            project_key: project_key.into(),
            api_token: api_token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load `<PREFIX>_API_URL`, `<PREFIX>_PROJECT_KEY`, `<PREFIX>_API_TOKEN`
    /// (and the optional `<PREFIX>_TIMEOUT_SECS`) from the environment.
    pub fn from_env(prefix: &str) -> Result<Self, ClientError> {
        let mut config = Self::new(
            require_env(&format!("{prefix}_API_URL"))?,
            require_env(&format!("{prefix}_PROJECT_KEY"))?,
            require_env(&format!("{prefix}_API_TOKEN"))?,
        );
        if let Some(secs) = std::env::var(format!("{prefix}_TIMEOUT_SECS"))
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn require_env(key: &str) -> Result<String, ClientError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ClientError::MissingEnv(key.to_string())),
    }
}
