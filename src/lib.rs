//! # backup-buddy - Date-sorted directory copies
//!
//! Walks a source tree and copies every file into
//! `<dest>/<YYYY>/<MM>-<YYYY>/<MM>-<DD>-<YYYY>/<name>`, where the date is the
//! file's modification time.

// Module declarations
pub mod commands;
pub mod config;
pub mod executor;
pub mod logging;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use types::{BuddyError, DatePath};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
