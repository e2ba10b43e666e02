//! Configuration Types
//!
//! All configuration structures with sensible defaults. Defaults point at
//! the public GitHub endpoints; every field can be overridden from a
//! `stacklens.toml` file or `STACKLENS_*` environment variables.

use serde::{Deserialize, Serialize};

use crate::constants::acquisition;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository host settings
    pub github: GithubConfig,

    /// Candidate-file fetch settings
    pub fetch: FetchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GithubConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `LensError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        for (field, value) in [
            ("github.api_base", &self.github.api_base),
            ("github.raw_base", &self.github.raw_base),
        ] {
            url::Url::parse(value).map_err(|e| {
                crate::types::LensError::Config(format!("{} is not a valid URL: {}", field, e))
            })?;
        }

        if self.github.timeout_secs == 0 {
            return Err(crate::types::LensError::Config(
                "github.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.fetch.file_timeout_secs == 0 {
            return Err(crate::types::LensError::Config(
                "fetch.file_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.fetch.max_concurrency == 0 {
            return Err(crate::types::LensError::Config(
                "fetch.max_concurrency must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// GitHub Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// REST API base URL (metadata lookups)
    pub api_base: String,

    /// Raw content base URL (per-file retrieval)
    pub raw_base: String,

    /// Optional API token. Unauthenticated access works; a token raises
    /// rate limits. Falls back to the `GITHUB_TOKEN` env var at the client
    /// boundary, where it is wrapped in `SecretString`.
    pub token: Option<String>,

    /// User-Agent header value
    pub user_agent: String,

    /// Metadata lookup timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: acquisition::DEFAULT_API_BASE.to_string(),
            raw_base: acquisition::DEFAULT_RAW_BASE.to_string(),
            token: None,
            user_agent: acquisition::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: acquisition::DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Fetch Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Candidate paths fetched concurrently (bounded worker pool)
    pub max_concurrency: usize,

    /// Per-file fetch timeout (seconds); a timed-out fetch is treated as
    /// an absent file
    pub file_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: acquisition::DEFAULT_MAX_CONCURRENCY,
            file_timeout_secs: acquisition::DEFAULT_FILE_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
