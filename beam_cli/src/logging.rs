//! Console and log-file sinks for the `beam` binary.
//!
//! The console follows `-v`/`-q`. A `--log-file` always records at least
//! DEBUG, so solver construction and document loads are on file even when
//! the console is quiet.

use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Console level for the given `-v` count.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Log-file level: the console level, raised to DEBUG. `-q` does not apply.
pub fn file_level_filter(verbosity: u8) -> LevelFilter {
    level_filter(verbosity, false).max(LevelFilter::DEBUG)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_filter(level_filter(verbosity, quiet));

    let file = log_file
        .map(|path| File::create(path).map_err(CliError::Io))
        .transpose()?
        .map(|file| {
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_filter(file_level_filter(verbosity))
        });

    tracing_subscriber::registry().with(console).with(file).init();
    Ok(())
}
