//! Configuration management

mod validate;

pub use validate::{directory_status, validate_directory, DirectoryStatus};

use crate::types::BuddyError;
use clap::Parser;
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

/// Source directory used when `--source=` is not given
pub const DEFAULT_SOURCE: &str = "./source";

/// Destination directory used when `--dest=` is not given
pub const DEFAULT_DESTINATION: &str = "./dest";

/// Tokens handed to clap untouched so help and version output keep working.
const PASSTHROUGH_TOKENS: [&str; 4] = ["--help", "-h", "--version", "-V"];

/// Command-line interface
#[derive(Debug, Parser)]
#[command(
    name = "backup-buddy",
    version,
    about = "Copy a directory tree into a YYYY/MM-YYYY/MM-DD-YYYY layout by modification date",
    args_override_self = true
)]
pub struct Cli {
    /// Directory to copy files from
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Directory the dated layout is built under
    #[arg(long = "dest", value_name = "PATH", default_value = DEFAULT_DESTINATION)]
    pub destination: String,

    /// Log what would happen without touching the filesystem
    #[arg(long = "dryRun")]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Tolerate a missing destination and create it on demand
    #[arg(short = 'c', long = "create-dest")]
    pub create_destination: bool,

    /// Leave existing destination files alone instead of failing
    #[arg(long = "allow-skip", alias = "skip")]
    pub skip_existing: bool,
}

impl Cli {
    /// Parse raw process arguments (without the program name).
    ///
    /// Exits the process on `--help`, `--version` or a clap error, like
    /// [`Parser::parse`].
    pub fn parse_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        match Self::try_parse_tokens(tokens) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }

    /// Fallible variant of [`Cli::parse_tokens`].
    pub fn try_parse_tokens<I, T>(tokens: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<String> = tokens
            .into_iter()
            .map(|t| t.into().to_string_lossy().into_owned())
            .collect();

        let canonical = normalize_args(&raw);
        Self::try_parse_from(std::iter::once("backup-buddy".to_string()).chain(canonical))
    }
}

/// Rewrite loosely formatted tokens into canonical flags.
///
/// Matching is by substring, so `--debugging` still enables debug output and a
/// single token may set several options. Tokens that match nothing are dropped.
pub fn normalize_args(raw: &[String]) -> Vec<String> {
    let mut canonical = Vec::with_capacity(raw.len());

    for arg in raw {
        if PASSTHROUGH_TOKENS.contains(&arg.as_str()) {
            canonical.push(arg.clone());
            continue;
        }

        if arg.contains("--source=") {
            canonical.push(format!("--source={}", strip_value(arg, "--source=")));
        }

        if arg.contains("--dest=") {
            canonical.push(format!("--dest={}", strip_value(arg, "--dest=")));
        }

        if arg.contains("--dryRun") {
            canonical.push("--dryRun".to_string());
        }

        if arg.contains("--debug") || arg == "-d" {
            canonical.push("--debug".to_string());
        }

        if arg.contains("--create-dest") || arg == "-c" {
            canonical.push("--create-dest".to_string());
        }

        if arg.contains("--allow-skip") || arg.contains("--skip") {
            canonical.push("--allow-skip".to_string());
        }
    }

    canonical
}

fn strip_value(arg: &str, prefix: &str) -> String {
    arg.replace(prefix, "").replace('"', "")
}

/// Run configuration, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Source directory
    pub source: PathBuf,

    /// Destination root for the dated layout
    pub destination: PathBuf,

    /// Log actions instead of performing them
    #[serde(rename = "is_dry_run")]
    pub dry_run: bool,

    /// Verbose logging
    #[serde(rename = "is_debug_mode")]
    pub debug: bool,

    /// Accept a missing destination root
    #[serde(rename = "should_create_dest")]
    pub create_destination: bool,

    /// Skip files whose destination already exists
    #[serde(rename = "should_skip_existing_files")]
    pub skip_existing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            dry_run: false,
            debug: false,
            create_destination: false,
            skip_existing: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            source: PathBuf::from(cli.source),
            destination: PathBuf::from(cli.destination),
            dry_run: cli.dry_run,
            debug: cli.debug,
            create_destination: cli.create_destination,
            skip_existing: cli.skip_existing,
        }
    }
}

impl Config {
    /// Serialize the configuration as a single JSON line for debug output
    pub fn to_json(&self) -> Result<String, BuddyError> {
        serde_json::to_string(self)
            .map_err(|e| BuddyError::Config(format!("Unable to serialize configuration: {}", e)))
    }

    /// Validate source and destination directories
    ///
    /// The source must be an existing directory. The destination must be one
    /// too, unless `create_destination` is set and it is merely missing.
    pub fn validate(&self) -> Result<(), BuddyError> {
        if !validate_directory(&self.source) {
            return Err(BuddyError::Config(format!(
                "Invalid source directory: {}",
                self.source.display()
            )));
        }

        match directory_status(&self.destination) {
            DirectoryStatus::Valid => {}
            DirectoryStatus::Missing if self.create_destination => {
                validate_directory(&self.destination);
                info!("Destination folder does not exist and will be created");
            }
            _ => {
                validate_directory(&self.destination);
                return Err(BuddyError::Config(format!(
                    "Invalid destination directory: {}",
                    self.destination.display()
                )));
            }
        }

        Ok(())
    }
}
