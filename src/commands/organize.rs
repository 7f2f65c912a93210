//! Main organize command: validate, gather, then copy each file into its dated folder

use crate::executor::{copy_file, prepare_for_date, CopyOutcome};
use crate::scanner::collect_files;
use crate::types::{BuddyError, DatePath};
use crate::Config;
use indicatif::HumanBytes;
use std::fmt;
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::Path;
use tracing::{debug, info};

/// Counters for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files gathered from the source tree
    pub files_found: usize,
    /// Files written to the destination
    pub copied: usize,
    /// Files left alone because the destination already existed
    pub skipped: usize,
    /// Aggregate bytes written
    pub bytes_copied: u64,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            return write!(
                f,
                "Dry-run complete: {} file(s) would be copied, no changes were made",
                self.files_found
            );
        }
        write!(
            f,
            "{} copied, {} skipped | {} total",
            self.copied,
            self.skipped,
            HumanBytes(self.bytes_copied)
        )
    }
}

/// Run the organize operation
///
/// Files are processed in walk order and the first error stops the run.
/// Files copied before the failure stay where they are.
pub fn run(config: &Config) -> Result<RunSummary, BuddyError> {
    debug!("config loaded: {}", config.to_json()?);
    if config.dry_run {
        info!("[dry-run] Running in dry-run mode, no changes will be made");
    }
    debug!("Running in debug mode");
    if config.create_destination {
        debug!("Destination folder will be created if it does not exist");
    }

    info!("Validating config directories");
    config.validate()?;
    debug!("[init] Source and destination directories valid");
    info!("Config directories validated");

    info!("Gathering files");
    let files = collect_files(&config.source)?;
    info!("{} files gathered.", files.len());

    let mut summary = RunSummary {
        files_found: files.len(),
        dry_run: config.dry_run,
        ..RunSummary::default()
    };

    info!(
        "Preparing destination directories for all files in {}",
        config.source.display()
    );
    let total = files.len();
    for (index, file) in files.iter().enumerate() {
        process_file(file, config, &mut summary)?;
        if index + 1 < total {
            info!("{}", format_progress(index + 1, total));
        }
    }

    info!("{}", format_progress(total, total));
    info!(
        "Destination directories prepared at {} for all files in {}",
        config.destination.display(),
        config.source.display()
    );
    info!("{}", summary);

    Ok(summary)
}

fn process_file(file: &Path, config: &Config, summary: &mut RunSummary) -> Result<(), BuddyError> {
    let stat_error = |e: Error| BuddyError::Stat {
        path: file.to_path_buf(),
        source: e,
    };

    let metadata = fs::metadata(file).map_err(stat_error)?;
    let date = DatePath::from_system_time(metadata.modified().map_err(stat_error)?);
    debug!(
        "[found-file] File {} modified on {}",
        file.display(),
        date.display_date()
    );

    let relative = prepare_for_date(&date, config)?;
    debug!("[dest-create] File path {} prepared", date);

    let file_name = file
        .file_name()
        .ok_or_else(|| stat_error(Error::new(ErrorKind::InvalidInput, "path has no file name")))?;
    let dest = config.destination.join(relative).join(file_name);

    if config.dry_run {
        info!("[dry-run] cp {} {}", file.display(), dest.display());
        return Ok(());
    }

    match copy_file(file, &dest, config.skip_existing)? {
        CopyOutcome::Copied(bytes) => {
            summary.copied += 1;
            summary.bytes_copied += bytes;
        }
        CopyOutcome::Skipped => summary.skipped += 1,
    }

    Ok(())
}

/// `Processed i/N (p.pp%)`; an empty run counts as complete
fn format_progress(done: usize, total: usize) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        done as f64 / total as f64 * 100.0
    };
    format!("Processed {}/{} ({:.2}%)", done, total, percent)
}
