//! # Flexure CLI
//!
//! Command-line front end for `beam_core`: evaluates beam documents at
//! chosen positions, summarizes governing values, and writes a sample
//! document to start from.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use tracing::{debug, error, info};

use crate::cli::{Cli, Commands};
use crate::error::Result;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        if let Some(json) = e.details_json() {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("Flexure CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = match cli.command {
        Commands::Eval(args) => commands::eval(args),
        Commands::Analyze(args) => commands::analyze(args),
        Commands::Init(args) => commands::init(args),
    };

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }
    result
}
