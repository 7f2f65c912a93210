//! Directory validation for the source and destination roots

use std::fs;
use std::path::Path;
use tracing::warn;

/// Result of inspecting a configured directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    /// Path exists and is a directory
    Valid,
    /// Nothing could be found at the path
    Missing,
    /// Path exists but is not a directory
    NotADirectory,
}

/// Inspect `path` without logging or creating anything.
///
/// Symlinks are followed, so a link to a directory counts as valid. Any
/// metadata failure (including permission errors) is reported as `Missing`.
pub fn directory_status(path: &Path) -> DirectoryStatus {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => DirectoryStatus::Valid,
        Ok(_) => DirectoryStatus::NotADirectory,
        Err(_) => DirectoryStatus::Missing,
    }
}

/// Returns true when `path` is an existing directory, logging a warning otherwise
pub fn validate_directory(path: &Path) -> bool {
    match directory_status(path) {
        DirectoryStatus::Valid => true,
        DirectoryStatus::Missing => {
            warn!("Directory {} does not exist.", path.display());
            false
        }
        DirectoryStatus::NotADirectory => {
            warn!("{} is not a directory.", path.display());
            false
        }
    }
}
