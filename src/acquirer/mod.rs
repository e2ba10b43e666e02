//! Repository File Acquirer
//!
//! Produces the fetched-file set for a repository coordinate without a
//! clone: verify existence/visibility, resolve the effective branch, then
//! fetch the fixed candidate path list by direct content retrieval.
//!
//! Failure semantics: every failure is one of `RepositoryNotFound`,
//! `RepositoryPrivate`, `BranchNotFound`, `NoRecognizedFiles`, or
//! `Transport`, so callers can produce the right user-facing message.
//! There is no cross-attempt retry; the only fallback performed here is
//! the alternate-branch probe when no explicit branch was requested.

mod github;
mod host;
mod paths;

pub use github::GithubHost;
pub use host::RepositoryHost;
pub use paths::CANDIDATE_PATHS;

use std::sync::Arc;

use futures::StreamExt;
use tracing::{debug, info, warn};

use crate::constants::acquisition;
use crate::types::{FetchedFile, LensError, RepositoryCoordinate, Result};

/// Orchestrates one acquisition pass against a [`RepositoryHost`]
pub struct FileAcquirer {
    host: Arc<dyn RepositoryHost>,
    max_concurrency: usize,
}

impl FileAcquirer {
    pub fn new(host: Arc<dyn RepositoryHost>) -> Self {
        Self {
            host,
            max_concurrency: acquisition::DEFAULT_MAX_CONCURRENCY,
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Resolve the branch to fetch from: the explicitly requested branch,
    /// else the host's default branch, else the literal `"main"` when the
    /// metadata lookup could not supply one.
    pub async fn resolve_branch(&self, coordinate: &RepositoryCoordinate) -> String {
        if let Some(branch) = &coordinate.branch {
            return branch.clone();
        }

        match self
            .host
            .check_repository(&coordinate.owner, &coordinate.name)
            .await
        {
            Ok(status) => status
                .default_branch
                .unwrap_or_else(|| acquisition::FALLBACK_DEFAULT_BRANCH.to_string()),
            Err(e) => {
                debug!("branch resolution lookup failed, assuming default: {}", e);
                acquisition::FALLBACK_DEFAULT_BRANCH.to_string()
            }
        }
    }

    /// The orchestrating entry point: verify, resolve, fetch, fall back.
    ///
    /// Returns the non-empty fetched-file set, ordered by candidate index
    /// so repeated acquisitions of the same snapshot are identical.
    pub async fn acquire(&self, coordinate: &RepositoryCoordinate) -> Result<Vec<FetchedFile>> {
        let owner = &coordinate.owner;
        let name = &coordinate.name;

        let status = self.host.check_repository(owner, name).await?;

        if !status.exists {
            return Err(LensError::RepositoryNotFound {
                message: status
                    .message_or("Repository not found. Please check the owner and repository name."),
            });
        }

        if status.is_private {
            return Err(LensError::RepositoryPrivate {
                message: status.message_or("Repository is private. Public repositories only."),
            });
        }

        let branch = coordinate.branch.clone().or(status.default_branch).unwrap_or_else(|| {
            acquisition::FALLBACK_DEFAULT_BRANCH.to_string()
        });

        info!("acquiring {}/{} on branch {}", owner, name, branch);

        let files = self.fetch_candidates(owner, name, &branch).await;

        if files.is_empty() {
            return Err(self.diagnose_empty(coordinate, &branch).await);
        }

        info!("fetched {} candidate files from {}/{}", files.len(), owner, name);
        Ok(files)
    }

    /// Fetch every candidate path concurrently (bounded pool); results are
    /// merged order-independently, then sorted back into candidate order.
    async fn fetch_candidates(&self, owner: &str, name: &str, branch: &str) -> Vec<FetchedFile> {
        let mut stream = futures::stream::iter(CANDIDATE_PATHS.iter().enumerate())
            .map(|(index, path)| {
                let host = Arc::clone(&self.host);
                async move {
                    match host.fetch_file(owner, name, branch, path).await {
                        Ok(Some(file)) => Some((index, file)),
                        Ok(None) => None,
                        Err(e) => {
                            warn!("candidate fetch of {} failed: {}", path, e);
                            None
                        }
                    }
                }
            })
            .buffer_unordered(self.max_concurrency);

        let mut found = Vec::new();
        while let Some(item) = stream.next().await {
            if let Some(entry) = item {
                found.push(entry);
            }
        }

        found.sort_by_key(|(index, _)| *index);
        found.into_iter().map(|(_, file)| file).collect()
    }

    /// Classify why nothing was fetched: a missing explicit branch is a
    /// `BranchNotFound`; otherwise the repository holds no recognized files
    /// (alternate common branches are probed first for diagnostics).
    async fn diagnose_empty(
        &self,
        coordinate: &RepositoryCoordinate,
        branch: &str,
    ) -> LensError {
        debug!("no candidates found, probing {} on {}", acquisition::PROBE_FILE, branch);

        let probe = self
            .host
            .fetch_file(
                &coordinate.owner,
                &coordinate.name,
                branch,
                acquisition::PROBE_FILE,
            )
            .await
            .unwrap_or(None);

        if probe.is_none() {
            if let Some(requested) = &coordinate.branch {
                return LensError::BranchNotFound {
                    branch: requested.clone(),
                };
            }

            for alternate in acquisition::ALTERNATE_BRANCHES {
                let found = self
                    .host
                    .fetch_file(
                        &coordinate.owner,
                        &coordinate.name,
                        alternate,
                        acquisition::PROBE_FILE,
                    )
                    .await
                    .unwrap_or(None);
                if found.is_some() {
                    debug!("repository has content on alternate branch {}", alternate);
                    break;
                }
            }
        }

        LensError::NoRecognizedFiles
    }
}

// =============================================================================
// Tests
// =============================================================================
