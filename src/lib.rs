//! models-sync - OpenRouter models listing snapshot tool
//!
//! Downloads the models listing, stores it verbatim, stores a canonical
//! (key-sorted, name-sorted) copy for the served assets, and bumps the
//! package minor version so the new snapshot can be published.
//!
//! ## Pipeline
//! ```text
//! fetch -> write raw -> canonicalize -> write canonical -> bump manifest
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use models_sync::{ModelsSync, SyncConfig};
//!
//! # async fn demo() -> Result<(), models_sync::SyncError> {
//! let sync = ModelsSync::new(SyncConfig::default())?;
//! let report = sync.run().await?;
//! println!("published {}", report.version.current);
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Fixed endpoint and file layout
pub mod config;

// HTTP fetcher
pub mod fetch;

// Deterministic JSON ordering
pub mod canonical;

// Pretty-printed JSON file output
pub mod output;

// package.json version bump
pub mod manifest;

// Orchestrator
pub mod sync;

pub use canonical::{canonicalize, NameTag};
pub use config::SyncConfig;
pub use error::{FileAction, ManifestFormatError, SyncError};
pub use fetch::ModelsClient;
pub use manifest::{bump_minor_version, next_minor_version, VersionBump};
pub use sync::{ModelsSync, SyncReport};
