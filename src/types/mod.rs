//! Core type definitions for backup-buddy

mod date_path;
mod error;

pub use date_path::DatePath;
pub use error::BuddyError;
