//! Unified Error Type System
//!
//! Centralized error types for the entire crate.
//! Acquisition failures are classified so callers can branch on them and
//! produce the right user-facing message.
//!
//! ## Error Taxonomy
//!
//! - **RepositoryNotFound / RepositoryPrivate**: bad input or access
//! - **BranchNotFound**: the requested branch does not exist
//! - **NoRecognizedFiles**: the repository contains none of the candidate files
//! - **Transport**: network/lookup failure unrelated to repository state
//! - **NoTechnologiesDetected**: analysis ran and matched nothing
//!
//! ## Design Principles
//!
//! - Single unified error type (LensError) for the entire crate
//! - Acquisition errors abort the pipeline before classification runs
//! - Manifest parse failures are recovered locally, never propagated
//! - No panic/unwrap - all errors are recoverable

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LensError {
    // -------------------------------------------------------------------------
    // Acquisition Errors
    // -------------------------------------------------------------------------
    /// The metadata lookup reported the repository does not exist
    #[error("{message}")]
    RepositoryNotFound { message: String },

    /// The metadata lookup reported the repository is private
    #[error("{message}")]
    RepositoryPrivate { message: String },

    /// An explicit branch was requested and nothing could be fetched from it
    #[error("branch \"{branch}\" not found in repository")]
    BranchNotFound { branch: String },

    /// The repository exists and is public, but contains none of the
    /// candidate files the detector knows how to read
    #[error(
        "no recognized configuration files found in repository \
         (expected package.json, requirements.txt, go.mod, or similar)"
    )]
    NoRecognizedFiles,

    /// Network or lookup failure unrelated to repository state.
    /// Carries the underlying status/message for diagnostics.
    #[error("repository lookup failed: {message}")]
    Transport { message: String },

    // -------------------------------------------------------------------------
    // Classification Errors
    // -------------------------------------------------------------------------
    /// Analysis ran to completion and matched no known signature
    #[error("no technologies detected: the repository matches no known signature")]
    NoTechnologiesDetected,

    // -------------------------------------------------------------------------
    // Ambient Errors
    // -------------------------------------------------------------------------
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LensError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl LensError {
    /// Transport error from an HTTP status + body (status preserved for
    /// diagnostics)
    pub fn transport_status(status: reqwest::StatusCode, detail: impl AsRef<str>) -> Self {
        Self::Transport {
            message: format!("unexpected status {}: {}", status, detail.as_ref()),
        }
    }

    /// Check if this error arose during acquisition (before classification)
    pub fn is_acquisition(&self) -> bool {
        matches!(
            self,
            Self::RepositoryNotFound { .. }
                | Self::RepositoryPrivate { .. }
                | Self::BranchNotFound { .. }
                | Self::NoRecognizedFiles
                | Self::Transport { .. }
        )
    }

    /// Check if this error describes a condition the user can act on
    /// (as opposed to an infrastructure fault)
    pub fn is_user_actionable(&self) -> bool {
        !matches!(self, Self::Transport { .. } | Self::Config(_))
    }
}

impl From<reqwest::Error> for LensError {
    fn from(err: reqwest::Error) -> Self {
        LensError::Transport {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
