//! Executor module for file operations

pub mod copy;
pub mod dirs;

pub use copy::{copy_file, CopyOutcome};
pub use dirs::prepare_for_date;
