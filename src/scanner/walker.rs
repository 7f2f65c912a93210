//! Sequential directory walker

use crate::types::BuddyError;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// macOS Finder metadata, never copied at any depth
pub const EXCLUDED_FILE_NAME: &str = ".DS_Store";

/// Decide whether a walked entry belongs in the copy list
///
/// Directories are never collected, and neither is [`EXCLUDED_FILE_NAME`].
/// This is an exact name match, not a pattern.
pub fn should_collect(name: &OsStr, is_dir: bool) -> bool {
    !is_dir && name != OsStr::new(EXCLUDED_FILE_NAME)
}

/// Collect every file under `root_path`, in lexical walk order
///
/// Uses the `ignore` crate for traversal with all of its filters turned off:
/// hidden files and anything a `.gitignore` would hide are still gathered.
/// Symlinks are not followed during traversal; a symlink is collected only
/// when it points at a regular file. Fifos, sockets and devices are skipped.
///
/// # Errors
/// Any traversal error aborts the walk with `BuddyError::Walk`; no partial
/// list is returned.
pub fn collect_files(root_path: &Path) -> Result<Vec<PathBuf>, BuddyError> {
    let walker = ignore::WalkBuilder::new(root_path)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();

    for result in walker {
        let entry = result.map_err(|e| BuddyError::Walk {
            path: root_path.to_path_buf(),
            source: e,
        })?;

        let file_type = match entry.file_type() {
            Some(ft) => ft,
            None => continue,
        };

        if !should_collect(entry.file_name(), file_type.is_dir()) {
            continue;
        }

        if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => {}
                _ => {
                    debug!(
                        "[walk] Skipping {}: symlink does not point at a regular file",
                        entry.path().display()
                    );
                    continue;
                }
            }
        } else if !file_type.is_file() {
            debug!("[walk] Skipping special file {}", entry.path().display());
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}
