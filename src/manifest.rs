//! Manifest version bump
//!
//! Bumps the minor component of `package.json`'s `version` and resets the
//! patch component: `2.5.9` becomes `2.6.0`. The version is only split on
//! dots; major and patch are carried as text and not validated.
//!
//! The manifest is rewritten in place, every other key untouched and in its
//! original position.

use std::path::Path;

use serde_json::Value;
use tracing::{error, info};

use crate::error::{FileAction, ManifestFormatError, SyncError};
use crate::output::to_pretty_json;

pub const VERSION_FIELD: &str = "version";

/// Outcome of a successful bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBump {
    pub previous: String,
    pub current: String,
}

/// `major.minor.patch` -> `major.(minor+1).0`
pub fn next_minor_version(version: &str) -> Result<String, ManifestFormatError> {
    let parts: Vec<&str> = version.split('.').collect();
    let [major, minor, _patch] = parts.as_slice() else {
        return Err(ManifestFormatError::WrongComponentCount {
            version: version.to_string(),
            found: parts.len(),
        });
    };

    let minor: u64 = minor
        .parse()
        .map_err(|_| ManifestFormatError::InvalidMinor {
            version: version.to_string(),
            minor: minor.to_string(),
        })?;
    let minor = minor
        .checked_add(1)
        .ok_or_else(|| ManifestFormatError::MinorOverflow {
            version: version.to_string(),
        })?;

    Ok(format!("{major}.{minor}.0"))
}

/// Bump the minor version of the manifest at `path` and write it back.
pub async fn bump_minor_version(path: &Path) -> Result<VersionBump, SyncError> {
    let result = bump(path).await;
    match &result {
        Ok(bump) => info!(
            "Version bumped from {} to {}",
            bump.previous, bump.current
        ),
        Err(e) => error!(kind = e.kind(), "Error bumping version: {e}"),
    }
    result
}

async fn bump(path: &Path) -> Result<VersionBump, SyncError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SyncError::file(FileAction::Read, path, e))?;

    let mut manifest: Value = serde_json::from_str(&text).map_err(|source| SyncError::Parse {
        origin: path.display().to_string(),
        source,
    })?;

    let format = |source| SyncError::Format {
        path: path.to_path_buf(),
        source,
    };

    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| format(ManifestFormatError::NotAnObject))?;
    let previous = match fields.get(VERSION_FIELD) {
        None => return Err(format(ManifestFormatError::MissingVersion)),
        Some(Value::String(v)) => v.clone(),
        Some(_) => return Err(format(ManifestFormatError::VersionNotString)),
    };
    let current = next_minor_version(&previous).map_err(format)?;

    // insert on an existing key keeps its position
    fields.insert(VERSION_FIELD.to_string(), Value::String(current.clone()));

    tokio::fs::write(path, to_pretty_json(&manifest)?)
        .await
        .map_err(|e| SyncError::file(FileAction::Write, path, e))?;

    Ok(VersionBump { previous, current })
}
