//! Change-detecting file writes.

use std::path::Path;

use crate::error::{BuildError, Result};

/// Write `contents` to `path` only if the file is missing or differs.
///
/// Returns whether the file was actually (re)written. Parent directories are
/// created as needed.
pub fn write_file_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if let Ok(existing) = std::fs::read_to_string(path) {
        if existing == contents {
            return Ok(false);
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BuildError::Io {
            path: parent.to_path_buf(),
            detail: format!("creating directory: {e}"),
        })?;
    }

    std::fs::write(path, contents).map_err(|e| BuildError::Io {
        path: path.to_path_buf(),
        detail: format!("writing file: {e}"),
    })?;
    Ok(true)
}
