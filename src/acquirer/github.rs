//! GitHub Repository Host
//!
//! [`RepositoryHost`] implementation backed by the public GitHub REST API
//! (metadata) and the raw-content endpoint (per-file retrieval). An
//! optional API token raises rate limits; unauthenticated access works for
//! public repositories.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, warn};

use super::RepositoryHost;
use crate::config::Config;
use crate::types::{FetchedFile, LensError, RepositoryStatus, Result};

const NOT_FOUND_MESSAGE: &str =
    "Repository not found. Please check the owner and repository name.";
const ACCESS_DENIED_MESSAGE: &str = "Repository may be private. Access denied.";
const PRIVATE_MESSAGE: &str = "Repository is private. Public repositories only.";

/// GitHub-backed host with secure token handling
pub struct GithubHost {
    /// API token stored securely - never exposed in logs or debug output
    token: Option<SecretString>,
    api_base: String,
    raw_base: String,
    file_timeout: Duration,
    client: reqwest::Client,
}

impl std::fmt::Debug for GithubHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubHost")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("raw_base", &self.raw_base)
            .field("file_timeout", &self.file_timeout)
            .finish()
    }
}

impl GithubHost {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.github.timeout_secs))
            .user_agent(config.github.user_agent.clone())
            .build()
            .map_err(|e| LensError::Transport {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        let token = config
            .github
            .token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok());

        Ok(Self {
            token: token.map(SecretString::from),
            api_base: config.github.api_base.trim_end_matches('/').to_string(),
            raw_base: config.github.raw_base.trim_end_matches('/').to_string(),
            file_timeout: Duration::from_secs(config.fetch.file_timeout_secs),
            client,
        })
    }

    /// Host using the default public GitHub endpoints
    pub fn public() -> Result<Self> {
        Self::new(&Config::default())
    }

    fn raw_url(&self, owner: &str, name: &str, branch: &str, path: &str) -> String {
        format!("{}/{}/{}/{}/{}", self.raw_base, owner, name, branch, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }
}

/// Subset of the repository metadata response we care about
#[derive(Debug, Deserialize)]
struct RepoMetadata {
    #[serde(default)]
    private: bool,
    default_branch: Option<String>,
}

#[async_trait]
impl RepositoryHost for GithubHost {
    async fn check_repository(&self, owner: &str, name: &str) -> Result<RepositoryStatus> {
        let url = format!("{}/repos/{}/{}", self.api_base, owner, name);
        debug!("checking repository metadata: {}", url);

        let response = self
            .authorize(self.client.get(&url))
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| LensError::Transport {
                message: format!("repository lookup for {}/{} failed: {}", owner, name, e),
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(RepositoryStatus {
                exists: false,
                is_private: false,
                default_branch: None,
                message: Some(NOT_FOUND_MESSAGE.to_string()),
            });
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Ok(RepositoryStatus {
                exists: true,
                is_private: true,
                default_branch: None,
                message: Some(ACCESS_DENIED_MESSAGE.to_string()),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LensError::transport_status(status, body));
        }

        let metadata: RepoMetadata = response.json().await.map_err(|e| LensError::Transport {
            message: format!("failed to parse repository metadata: {}", e),
        })?;

        Ok(RepositoryStatus {
            exists: true,
            is_private: metadata.private,
            default_branch: metadata.default_branch,
            message: metadata.private.then(|| PRIVATE_MESSAGE.to_string()),
        })
    }

    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
        path: &str,
    ) -> Result<Option<FetchedFile>> {
        let url = self.raw_url(owner, name, branch, path);

        let response = match self
            .client
            .get(&url)
            .timeout(self.file_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            // Individual fetch failures (including timeouts) mean "absent"
            Err(e) => {
                debug!("fetch of {} failed: {}", path, e);
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            return Ok(None);
        }

        match response.bytes().await {
            Ok(bytes) => Ok(Some(FetchedFile::from_bytes(path, bytes.to_vec(), url))),
            Err(e) => {
                warn!("failed to read body of {}: {}", path, e);
                Ok(None)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
