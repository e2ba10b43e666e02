//! Repository Host Abstraction
//!
//! The seam between the acquirer's orchestration logic and the network.
//! Production uses [`super::GithubHost`]; tests substitute an in-memory
//! implementation.

use async_trait::async_trait;

use crate::types::{FetchedFile, RepositoryStatus, Result};

/// A remote host that can answer metadata lookups and serve raw file
/// content for `(owner, name, branch, path)` coordinates.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Metadata lookup for a repository.
    ///
    /// Not-found and access-denied are reported through the returned
    /// [`RepositoryStatus`], not as errors; only failures unrelated to
    /// repository state (network, unexpected statuses) produce
    /// `Err(Transport)`.
    async fn check_repository(&self, owner: &str, name: &str) -> Result<RepositoryStatus>;

    /// Retrieve one candidate path by direct content URL.
    ///
    /// Absence of an individual candidate is expected and normal: any
    /// non-success response, and a timed-out fetch, yield `Ok(None)`.
    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
        path: &str,
    ) -> Result<Option<FetchedFile>>;
}
