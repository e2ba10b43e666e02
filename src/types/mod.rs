//! Core Domain Types
//!
//! Immutable value types flowing through the acquisition and classification
//! phases, plus the unified error type.

pub mod error;

pub use error::{LensError, Result};

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Repository Coordinate
// =============================================================================

/// Reference to a remote repository.
///
/// `branch: None` means "resolve the default branch at acquisition time".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryCoordinate {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Explicitly requested branch, if any
    pub branch: Option<String>,
}

fn github_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"github\.com/([^/]+)/([^/]+)(?:/tree/([^/]+))?")
            .expect("github url regex is valid")
    })
}

impl RepositoryCoordinate {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            branch: None,
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Parse a GitHub repository URL.
    ///
    /// Accepts `https://github.com/<owner>/<repo>` with an optional
    /// `/tree/<branch>` suffix; trailing slashes and `.git` suffixes are
    /// tolerated. Returns `None` for anything else.
    pub fn parse_url(url: &str) -> Option<Self> {
        let cleaned = url.trim().trim_end_matches('/');
        let cleaned = cleaned.strip_suffix(".git").unwrap_or(cleaned);

        let caps = github_url_regex().captures(cleaned)?;
        let owner = caps.get(1)?.as_str();
        let name = caps.get(2)?.as_str().trim_end_matches(".git");
        if owner.is_empty() || name.is_empty() {
            return None;
        }

        Some(Self {
            owner: owner.to_string(),
            name: name.to_string(),
            branch: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }

    /// `owner/name` form used in log lines and messages
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.branch {
            Some(branch) => write!(f, "{}/{}@{}", self.owner, self.name, branch),
            None => write!(f, "{}/{}", self.owner, self.name),
        }
    }
}

// =============================================================================
// Fetched File
// =============================================================================

/// One successfully retrieved candidate file.
///
/// Content is kept as raw bytes: a file that is not valid UTF-8 is still
/// eligible for filename signals, while content signals skip it via
/// [`FetchedFile::text`]. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    /// Candidate path as requested (relative to the repository root)
    pub path: String,
    /// Raw response body
    pub content: Vec<u8>,
    /// URL the content was retrieved from
    pub source_url: String,
}

impl FetchedFile {
    /// Construct from a UTF-8 text body (the common case, and the only
    /// case in classifier tests)
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into().into_bytes(),
            source_url: source_url.into(),
        }
    }

    /// Construct from a raw response body
    pub fn from_bytes(
        path: impl Into<String>,
        content: Vec<u8>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content,
            source_url: source_url.into(),
        }
    }

    /// Content as UTF-8 text; `None` when the body is not valid UTF-8
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Final path segment (the filename signals match against this)
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

// =============================================================================
// Repository Status
// =============================================================================

/// Outcome of the repository metadata lookup.
///
/// Not-found and access-denied are distinguished outcomes, not errors -
/// callers branch on the fields rather than catching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryStatus {
    pub exists: bool,
    pub is_private: bool,
    /// Default branch reported by the host, when available
    pub default_branch: Option<String>,
    /// Human-readable message suitable for surfacing to the user
    pub message: Option<String>,
}

impl RepositoryStatus {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
