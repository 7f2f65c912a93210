//! Error types for backup-buddy

use std::path::PathBuf;
use thiserror::Error;

/// Error types for backup-buddy operations
#[derive(Debug, Error)]
pub enum BuddyError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (bad source or destination directory)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Directory traversal failed; the partial file list is discarded
    #[error("Issue reading source directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// Metadata for a gathered file could not be read
    #[error("Unable to stat file {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dated destination directory could not be created
    #[error("Unable to prepare directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination file exists and skipping is disabled
    #[error("Unable to copy {src} to {dest}. Reason: File Already Exists")]
    AlreadyExists { src: PathBuf, dest: PathBuf },

    /// Opening, creating or streaming a file failed
    #[error("Unable to copy {src} to {dest}: {source}")]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuddyError {
    /// Check if this error was raised before any file was touched
    pub fn is_config_error(&self) -> bool {
        matches!(self, BuddyError::Config(_))
    }

    /// Check if this error is a destination name collision
    pub fn is_conflict(&self) -> bool {
        matches!(self, BuddyError::AlreadyExists { .. })
    }

    /// Check if this error belongs to a single file rather than the whole run
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            BuddyError::Stat { .. }
                | BuddyError::CreateDir { .. }
                | BuddyError::AlreadyExists { .. }
                | BuddyError::Copy { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let buddy_error: BuddyError = io_error.into();

        assert!(matches!(buddy_error, BuddyError::Io(_)));
        assert!(buddy_error.to_string().contains("IO error"));
    }

    #[test]
    fn test_config_error() {
        let error = BuddyError::Config("Invalid source directory: ./source".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("./source"));
        assert!(error.is_config_error());
        assert!(!error.is_per_file());
    }

    #[test]
    fn test_already_exists_message() {
        let error = BuddyError::AlreadyExists {
            src: PathBuf::from("src/a.jpg"),
            dest: PathBuf::from("dest/2023/03-2023/03-07-2023/a.jpg"),
        };
        let msg = error.to_string();
        assert!(msg.contains("File Already Exists"));
        assert!(msg.contains("src/a.jpg"));
        assert!(msg.contains("03-07-2023/a.jpg"));
        assert!(error.is_conflict());
        assert!(error.is_per_file());
    }

    #[test]
    fn test_per_file_errors_keep_io_source() {
        use std::error::Error;

        let error = BuddyError::CreateDir {
            path: PathBuf::from("dest/2023"),
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("dest/2023"));
        assert!(error.source().is_some());
        assert!(error.is_per_file());
        assert!(!error.is_conflict());
    }

    #[test]
    fn test_result_propagation() {
        fn inner_function() -> Result<(), BuddyError> {
            Err(BuddyError::Config("test error".to_string()))
        }

        fn outer_function() -> Result<(), BuddyError> {
            inner_function()?;
            Ok(())
        }

        let result = outer_function();
        assert!(matches!(result.unwrap_err(), BuddyError::Config(_)));
    }
}
