//! Log output setup
//!
//! The library only emits `tracing` events; the binary installs the
//! subscriber once at startup.

use std::io::IsTerminal;
use tracing::Level;

/// Maximum level for a run: `DEBUG` with `--debug`, `INFO` otherwise
pub fn level_for(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global fmt subscriber writing to stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(debug))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
