//! Filesystem helpers shared by the annotate and renumber pipelines.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirError {
    #[error("path {} exists but is not a directory", .0.display())]
    Conflict(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create `path` if absent. An existing directory is fine; an existing
/// non-directory is a conflict. Only the final component is created —
/// a missing parent is an IO error, matching `mkdir` semantics.
pub fn ensure_dir(path: &Path) -> Result<(), DirError> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(DirError::Conflict(path.to_path_buf()));
    }
    std::fs::create_dir(path)?;
    Ok(())
}
