//! Writing documents received by the save endpoint.
//!
//! The body is checked only for being JSON with `people` and `relationships`
//! keys; everything else is trusted. The new content is staged in a `.tmp`
//! sibling, the current file (if any) is moved to the `.bak` sibling, and the
//! staged file is renamed into place, so the primary path never holds a
//! partial write.
//!
//! Concurrent saves to the same path are not serialized. Two racing requests
//! share the `.tmp` name and the last rename wins.

use std::path::{Path, PathBuf};

use crate::config::backup_path;
use crate::error::{Result, TreeError};

pub fn save_document(path: &Path, body: &[u8]) -> Result<()> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| TreeError::Format(format!("Invalid JSON: {e}")))?;

    if value.get("people").is_none() || value.get("relationships").is_none() {
        return Err(TreeError::validation("Invalid family tree data format"));
    }

    let bytes = serde_json::to_vec_pretty(&value)?;
    let staged = staging_path(path);

    if let Err(e) = std::fs::write(&staged, &bytes) {
        discard(&staged);
        return Err(e.into());
    }

    if path.exists() {
        if let Err(e) = std::fs::rename(path, backup_path(path)) {
            discard(&staged);
            return Err(e.into());
        }
    }

    std::fs::rename(&staged, path)?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(".tmp");
    PathBuf::from(raw)
}

fn discard(staged: &Path) {
    if let Err(e) = std::fs::remove_file(staged) {
        tracing::debug!("Could not remove staged file {}: {}", staged.display(), e);
    }
}
