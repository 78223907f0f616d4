//! Pretty-printed JSON file output

use std::path::Path;

use serde_json::Value;

use crate::error::{FileAction, SyncError};

/// Two-space indented JSON with no trailing newline.
pub fn to_pretty_json(value: &Value) -> Result<String, SyncError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Overwrite `path` with `value`, creating parent directories first.
///
/// Not atomic: a crash mid-write leaves a truncated file.
pub async fn write_json(path: &Path, value: &Value) -> Result<(), SyncError> {
    let text = to_pretty_json(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| SyncError::file(FileAction::CreateDir, parent, e))?;
    }

    tokio::fs::write(path, text)
        .await
        .map_err(|e| SyncError::file(FileAction::Write, path, e))
}
