//! StackLens - Repository Technology Detection
//!
//! A library that classifies the technology stack of a remote repository
//! without cloning it: a bounded set of candidate files is fetched by
//! direct content retrieval, then a static multi-signal rule catalog is
//! evaluated over the fetched set to produce a confidence-ranked,
//! deduplicated list of detected technologies plus a human-readable
//! summary.
//!
//! ## Pipeline
//!
//! 1. **Acquisition** ([`acquirer`]): verify the repository exists and is
//!    public, resolve the effective branch (tolerating branch-name
//!    ambiguity), fetch the candidate path list concurrently.
//! 2. **Classification** ([`classifier`]): evaluate every rule of the
//!    [`catalog::Catalog`] against the fetched files; per-rule confidence
//!    is the maximum matched signal confidence; detections clearing the
//!    threshold are ranked and summarized.
//!
//! Both phases are deterministic and idempotent for the same repository
//! snapshot. The crate owns no CLI or persistence - it is invoked as a
//! library by an embedding orchestration layer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use stacklens::{ConfigLoader, RepoAnalyzer, RepositoryCoordinate};
//!
//! let config = ConfigLoader::load()?;
//! let analyzer = RepoAnalyzer::from_config(&config)?;
//! let coordinate = RepositoryCoordinate::new("owner", "repo");
//! let result = analyzer.analyze(&coordinate).await?;
//! println!("{}", result.summary);
//! ```
//!
//! ## Modules
//!
//! - [`acquirer`]: repository host seam, GitHub client, candidate paths
//! - [`catalog`]: the static technology rule table and its schema
//! - [`classifier`]: pure matching/aggregation engine and summary
//! - [`config`]: figment-backed configuration
//! - [`pipeline`]: acquire-then-classify entry point

pub mod acquirer;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod pipeline;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, FetchConfig, GithubConfig};

// Error Types
pub use types::error::{LensError, Result};

// Domain Types
pub use types::{FetchedFile, RepositoryCoordinate, RepositoryStatus};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use acquirer::{CANDIDATE_PATHS, FileAcquirer, GithubHost, RepositoryHost};
pub use catalog::{Catalog, Matcher, Signal, SignalKind, TechCategory, TechnologyRule};
pub use classifier::{AnalysisResult, Detection, classify, normalize_version};
pub use pipeline::RepoAnalyzer;
