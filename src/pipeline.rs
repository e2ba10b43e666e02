//! Analysis Pipeline
//!
//! Ties the two phases together for the embedding application: acquire the
//! candidate files, then classify them. Acquisition failures abort the
//! pipeline before classification runs.
//!
//! The analyzer holds no mutable state - analyses for different
//! repositories may run fully in parallel on one instance.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use crate::acquirer::{FileAcquirer, GithubHost, RepositoryHost};
use crate::catalog::Catalog;
use crate::classifier::{AnalysisResult, classify};
use crate::config::Config;
use crate::types::{RepositoryCoordinate, Result};

/// One configured detection pipeline
pub struct RepoAnalyzer {
    acquirer: FileAcquirer,
    catalog: Catalog,
}

impl RepoAnalyzer {
    /// Analyzer over an explicit host, using the built-in catalog
    pub fn new(host: Arc<dyn RepositoryHost>) -> Self {
        Self {
            acquirer: FileAcquirer::new(host),
            catalog: Catalog::builtin().clone(),
        }
    }

    /// Analyzer against public GitHub with the given configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let host = Arc::new(GithubHost::new(config)?);
        Ok(Self {
            acquirer: FileAcquirer::new(host)
                .with_max_concurrency(config.fetch.max_concurrency),
            catalog: Catalog::builtin().clone(),
        })
    }

    /// Substitute a custom rule catalog (the default is the built-in table)
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Run the full pipeline for one repository coordinate.
    ///
    /// Every failure is one of the classified error kinds; the caller owns
    /// persistence of both results and failures, and any retry policy.
    pub async fn analyze(&self, coordinate: &RepositoryCoordinate) -> Result<AnalysisResult> {
        let started = Instant::now();
        info!("starting analysis for {}", coordinate);

        let files = match self.acquirer.acquire(coordinate).await {
            Ok(files) => files,
            Err(e) => {
                error!("acquisition failed for {}: {}", coordinate, e);
                return Err(e);
            }
        };

        let result = classify(&files, &self.catalog)?;

        info!(
            "analysis of {} complete: {} technologies in {}ms ({})",
            coordinate,
            result.detections.len(),
            started.elapsed().as_millis(),
            result.summary
        );

        Ok(result)
    }
}

// =============================================================================
// Tests
// =============================================================================
