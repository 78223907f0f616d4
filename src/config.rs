//! Sync configuration
//!
//! The tool takes no arguments and reads no environment: the endpoint and
//! file layout are fixed. `rooted_at` and `with_api_url` exist so the same
//! layout can be pointed at a scratch directory and a local server.

use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/models";
pub const RAW_OUTPUT_PATH: &str = "models.json";
pub const CANONICAL_OUTPUT_PATH: &str = "public/models.json";
pub const MANIFEST_PATH: &str = "package.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Models listing endpoint
    pub api_url: String,
    /// Response as downloaded, pretty-printed
    pub raw_output: PathBuf,
    /// Canonicalized response, served as a static asset
    pub canonical_output: PathBuf,
    /// Manifest whose minor version is bumped
    pub manifest: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            raw_output: PathBuf::from(RAW_OUTPUT_PATH),
            canonical_output: PathBuf::from(CANONICAL_OUTPUT_PATH),
            manifest: PathBuf::from(MANIFEST_PATH),
        }
    }
}

impl SyncConfig {
    /// Default layout with every file placed under `root`
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            raw_output: root.join(RAW_OUTPUT_PATH),
            canonical_output: root.join(CANONICAL_OUTPUT_PATH),
            manifest: root.join(MANIFEST_PATH),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
