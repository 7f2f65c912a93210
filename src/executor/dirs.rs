//! Dated destination directory preparation

use crate::types::{BuddyError, DatePath};
use crate::Config;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// Make sure `<destination>/<YYYY>/<MM-YYYY>/<MM-DD-YYYY>` exists
///
/// Returns the date path relative to the destination root. Existing
/// directories are left alone, and a missing destination root is created
/// along the way. In dry-run mode nothing is created; the would-be `mkdir`
/// is logged instead.
///
/// # Errors
/// `BuddyError::CreateDir` when the directory cannot be created, e.g.
/// permission denied or a regular file in the way.
pub fn prepare_for_date(date: &DatePath, config: &Config) -> Result<PathBuf, BuddyError> {
    let relative = date.relative_path();
    let full_path = config.destination.join(&relative);

    if full_path.is_dir() {
        return Ok(relative);
    }

    if config.dry_run {
        info!("[dry-run] mkdir -p {}", full_path.display());
        return Ok(relative);
    }

    fs::create_dir_all(&full_path).map_err(|e| {
        error!("[create-dir] Directory {} could not be created.", full_path.display());
        BuddyError::CreateDir {
            path: full_path.clone(),
            source: e,
        }
    })?;

    Ok(relative)
}
