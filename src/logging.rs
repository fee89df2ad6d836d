//! Diagnostic logging setup
//!
//! Pipeline diagnostics go through `tracing` to stderr. User-facing status
//! lines are printed separately by the commands.

use std::io::IsTerminal;

use tracing::Level;

/// Level selected by the global `--verbose` / `--quiet` flags.
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
///
/// Colors are only used when stderr is a terminal.
pub fn init(verbose: bool, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
