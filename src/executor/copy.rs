//! Single-file copy with skip-or-fail conflict handling

use crate::types::BuddyError;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use tracing::debug;

/// Stream buffer size
const COPY_BUFFER_SIZE: usize = 128 * 1024;

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// File was written; carries the number of bytes copied
    Copied(u64),
    /// Destination already existed and skipping is enabled
    Skipped,
}

/// Copy `src` to `dest`, refusing to overwrite
///
/// 1. Open the source
/// 2. If `dest` exists: skip when `skip_existing`, otherwise fail
/// 3. Create `dest` exclusively and stream the bytes across
///
/// The destination is written in place; an interrupted copy leaves a
/// truncated file behind. The parent directory must already exist.
///
/// # Errors
/// * `BuddyError::AlreadyExists` - destination present and skipping disabled
/// * `BuddyError::Copy` - open, create, read or write failure
pub fn copy_file(src: &Path, dest: &Path, skip_existing: bool) -> Result<CopyOutcome, BuddyError> {
    let copy_error = |e: std::io::Error| BuddyError::Copy {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        source: e,
    };
    let conflict = || {
        if skip_existing {
            debug!("[skip] File {} exists, skipping.", dest.display());
            Ok(CopyOutcome::Skipped)
        } else {
            Err(BuddyError::AlreadyExists {
                src: src.to_path_buf(),
                dest: dest.to_path_buf(),
            })
        }
    };

    let mut src_file = File::open(src).map_err(copy_error)?;

    // symlink_metadata so a dangling link at the destination still counts
    match fs::symlink_metadata(dest) {
        Ok(_) => return conflict(),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(copy_error(e)),
    }

    let mut dest_file = match OpenOptions::new().write(true).create_new(true).open(dest) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return conflict(),
        Err(e) => return Err(copy_error(e)),
    };

    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    let mut total_bytes = 0u64;

    loop {
        let bytes_read = match src_file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(copy_error(e)),
        };

        dest_file
            .write_all(&buffer[..bytes_read])
            .map_err(copy_error)?;
        total_bytes += bytes_read as u64;
    }

    dest_file.flush().map_err(copy_error)?;

    Ok(CopyOutcome::Copied(total_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_source_is_copy_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();

        let err = copy_file(&root.join("missing"), &root.join("out"), false)
            .expect_err("copy must fail");
        assert!(matches!(err, BuddyError::Copy { .. }));
        assert!(!root.join("out").exists());
    }

    #[test]
    fn test_missing_parent_is_copy_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::write(root.join("in"), b"data").expect("write source");

        let err = copy_file(&root.join("in"), &root.join("no/such/dir/out"), false)
            .expect_err("copy must fail");
        assert!(matches!(err, BuddyError::Copy { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_dangling_destination_symlink_counts_as_existing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::write(root.join("in"), b"data").expect("write source");
        std::os::unix::fs::symlink(root.join("gone"), root.join("out"))
            .expect("Failed to create symlink");

        let err = copy_file(&root.join("in"), &root.join("out"), false)
            .expect_err("copy must fail");
        assert!(err.is_conflict());
        assert_eq!(
            copy_file(&root.join("in"), &root.join("out"), true).expect("skip should succeed"),
            CopyOutcome::Skipped
        );
        assert!(!root.join("gone").exists());
    }
}
