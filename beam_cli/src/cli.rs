use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use beam_core::analysis::DEFAULT_SAMPLE_POINTS;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Flexure CLI - shear, moment, slope and deflection of simply-supported beams."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write logs to this file, at DEBUG or finer
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate all four responses at chosen positions.
    Eval(EvalArgs),
    /// Sample the beam and report reactions and governing values.
    Analyze(AnalyzeArgs),
    /// Write a sample beam document to start from.
    Init(InitArgs),
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Path to the beam document (JSON).
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Position from the left support; repeat for several positions.
    #[arg(long = "at", value_name = "X", required = true, allow_negative_numbers = true)]
    pub positions: Vec<f64>,

    /// Reject positions outside [0, length] instead of extrapolating.
    #[arg(long)]
    pub strict: bool,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the beam document (JSON).
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Number of evenly spaced sample points along the span.
    #[arg(short, long, value_name = "NUM", default_value_t = DEFAULT_SAMPLE_POINTS)]
    pub samples: usize,

    /// Include every sampled station in the JSON output.
    #[arg(long, requires = "json")]
    pub stations: bool,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the document.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Label stored in the document metadata.
    #[arg(long, default_value = "Stair flight")]
    pub label: String,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}
