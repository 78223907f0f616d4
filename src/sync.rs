//! Sync orchestrator
//!
//! Runs the pipeline strictly in order, each step awaited before the next:
//!
//! ```text
//! 1. fetch         GET api_url                      -> Network | Parse
//! 2. write raw     raw_output                       -> File | Serialize
//! 3. canonicalize  (pure)
//! 4. write sorted  canonical_output                 -> File | Serialize
//! 5. bump          manifest minor+1, patch 0        -> File | Parse | Format
//! ```
//!
//! The first error aborts the remaining steps. `run_logged` is the one place
//! errors are caught.

use std::path::PathBuf;

use tracing::{error, info};

use crate::canonical::canonicalize;
use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::fetch::ModelsClient;
use crate::manifest::{bump_minor_version, VersionBump};
use crate::output::write_json;

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub raw_output: PathBuf,
    pub canonical_output: PathBuf,
    pub version: VersionBump,
}

pub struct ModelsSync {
    client: ModelsClient,
    config: SyncConfig,
}

impl ModelsSync {
    pub fn new(config: SyncConfig) -> Result<Self, SyncError> {
        Ok(Self {
            client: ModelsClient::new()?,
            config,
        })
    }

    pub async fn run(&self) -> Result<SyncReport, SyncError> {
        let config = &self.config;

        info!("Downloading JSON from {}", config.api_url);
        let models = self.client.fetch_json(&config.api_url).await?;

        write_json(&config.raw_output, &models).await?;
        info!(
            "Downloaded JSON has been saved to {}",
            config.raw_output.display()
        );

        let sorted = canonicalize(&models);
        write_json(&config.canonical_output, &sorted).await?;
        info!(
            "Sorted JSON has been saved to {}",
            config.canonical_output.display()
        );

        let version = bump_minor_version(&config.manifest).await?;
        info!("Package version updated to {}", version.current);

        Ok(SyncReport {
            raw_output: config.raw_output.clone(),
            canonical_output: config.canonical_output.clone(),
            version,
        })
    }

    /// Run once, logging instead of returning the error.
    pub async fn run_logged(&self) -> Option<SyncReport> {
        match self.run().await {
            Ok(report) => Some(report),
            Err(e) => {
                error!(kind = e.kind(), "Error processing the file: {e}");
                None
            }
        }
    }
}
