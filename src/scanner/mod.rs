//! Source tree enumeration

mod walker;

pub use walker::{collect_files, should_collect, EXCLUDED_FILE_NAME};
