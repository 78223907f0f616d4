//! Error handling for the models sync pipeline
//!
//! Every failure in a run maps to exactly one `SyncError` variant. The
//! orchestrator catches it once, logs it with [`SyncError::kind`], and ends
//! the run.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for a sync run
#[derive(Error, Debug)]
pub enum SyncError {
    /// Transport-level failure: connection refused, DNS, TLS, truncated body.
    #[error("Failed to download JSON from {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Malformed JSON, either from the API or from the manifest.
    #[error("Failed to parse JSON from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to {action} {}: {source}", path.display())]
    File {
        action: FileAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest parsed as JSON but its `version` field is unusable.
    #[error("Invalid manifest {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: ManifestFormatError,
    },

    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SyncError {
    /// Short label used as the `kind` field in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::Network { .. } => "network",
            SyncError::Parse { .. } => "parse",
            SyncError::File { .. } => "file",
            SyncError::Format { .. } => "format",
            SyncError::Serialize(_) => "serialize",
        }
    }

    pub(crate) fn file(action: FileAction, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::File {
            action,
            path: path.into(),
            source,
        }
    }
}

/// What was being done to a file when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Read,
    Write,
    CreateDir,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Read => write!(f, "read"),
            FileAction::Write => write!(f, "write"),
            FileAction::CreateDir => write!(f, "create directory"),
        }
    }
}

/// Ways the manifest `version` field can be unusable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestFormatError {
    #[error("manifest is not a JSON object")]
    NotAnObject,

    #[error("missing \"version\" field")]
    MissingVersion,

    #[error("\"version\" is not a string")]
    VersionNotString,

    #[error("version '{version}' has {found} dot-separated parts, expected 3")]
    WrongComponentCount { version: String, found: usize },

    #[error("minor component '{minor}' of version '{version}' is not a non-negative integer")]
    InvalidMinor { version: String, minor: String },

    #[error("minor component of version '{version}' overflows")]
    MinorOverflow { version: String },
}
