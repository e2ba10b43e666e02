//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Detection engine constants
pub mod detection {
    /// Minimum aggregated confidence for a technology to be reported.
    ///
    /// Hand-tuned alongside the per-signal confidences in the rule catalog;
    /// treated as contract, not a tuning knob.
    pub const CONFIDENCE_THRESHOLD: f64 = 0.7;
}

/// Repository acquisition constants
pub mod acquisition {
    /// GitHub REST API base URL (repository metadata lookups)
    pub const DEFAULT_API_BASE: &str = "https://api.github.com";

    /// Raw content base URL (per-file retrieval)
    pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

    /// Branch assumed when metadata lookup cannot supply a default
    pub const FALLBACK_DEFAULT_BRANCH: &str = "main";

    /// Alternate branch names probed when no explicit branch was requested
    /// and nothing was found on the resolved branch
    pub const ALTERNATE_BRANCHES: &[&str] = &["master", "develop", "main"];

    /// File used as the diagnostic probe for branch existence
    pub const PROBE_FILE: &str = "README.md";

    /// Default number of candidate paths fetched concurrently
    pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

    /// Default timeout for the metadata lookup (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default timeout for a single candidate-file fetch (seconds).
    /// A timed-out fetch is treated identically to an absent file.
    pub const DEFAULT_FILE_TIMEOUT_SECS: u64 = 15;

    /// User-Agent sent on every request (GitHub rejects anonymous agents)
    pub const DEFAULT_USER_AGENT: &str = concat!("stacklens/", env!("CARGO_PKG_VERSION"));
}
