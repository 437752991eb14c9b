use serde::Serialize;
use tracing::{info, warn};

use beam_core::{load_document, save_document, BeamDocument, BeamSolver, ResponseKind, SpanPolicy};

use crate::cli::{AnalyzeArgs, EvalArgs, InitArgs};
use crate::error::{CliError, Result};

/// One row of `eval` output
#[derive(Debug, Serialize)]
struct EvalRow {
    position: f64,
    shear: f64,
    moment: f64,
    slope: f64,
    deflection: f64,
}

pub fn eval(args: EvalArgs) -> Result<()> {
    let document = load_document(&args.input)?;
    let model = document.beam.model()?;
    let policy = if args.strict { SpanPolicy::Strict } else { SpanPolicy::Extrapolate };
    let solver = BeamSolver::new(model).with_span_policy(policy);

    let mut rows = Vec::with_capacity(args.positions.len());
    for &x in &args.positions {
        if !args.strict && !(0.0..=model.length()).contains(&x) {
            warn!(x, length = model.length(), "Position outside the span, extrapolating");
        }
        rows.push(EvalRow {
            position: x,
            shear: solver.shear(x)?,
            moment: solver.moment(x)?,
            slope: solver.slope(x)?,
            deflection: solver.deflection(x)?,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print_header(&document);
    println!(
        "  {:>10}  {:>14}  {:>14}  {:>14}  {:>14}",
        "x", "Shear", "Moment", "Slope", "Deflection"
    );
    for row in &rows {
        println!(
            "  {:>10.4}  {:>14.6}  {:>14.6}  {:>14.6e}  {:>14.6e}",
            row.position, row.shear, row.moment, row.slope, row.deflection
        );
    }
    Ok(())
}

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let document = load_document(&args.input)?;
    let solver = BeamSolver::new(document.beam.model()?);
    let mut results = solver.analyze(args.samples)?;
    info!(stations = results.stations.len(), "Analysis complete");

    if args.json {
        if !args.stations {
            results.stations.clear();
        }
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    print_header(&document);
    println!("Reactions:");
    println!("  Left  (x = 0):    {:>14.6}", results.reactions.left);
    println!("  Right (x = L):    {:>14.6}", results.reactions.right);
    println!();
    println!("Governing values:");
    for kind in ResponseKind::ALL {
        let extreme = results.extreme(kind);
        println!(
            "  {:<11} {:>14.6e}  at x = {:.4}",
            kind.label(),
            extreme.value,
            extreme.position
        );
    }
    Ok(())
}

pub fn init(args: InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(CliError::Argument(format!(
            "'{}' already exists (use --force to overwrite)",
            args.output.display()
        )));
    }
    let document = BeamDocument::stair_landing_sample(args.label)?;
    save_document(&document, &args.output)?;
    println!("Wrote sample beam '{}' to {}", document.meta.label, args.output.display());
    Ok(())
}

fn print_header(document: &BeamDocument) {
    let beam = &document.beam;
    println!("═══════════════════════════════════════");
    println!("  {}", document.meta.label);
    println!("═══════════════════════════════════════");
    println!("  Span:    {}", beam.length);
    println!("  E:       {:e}", beam.modulus);
    println!("  I:       {:e}", beam.moment_of_inertia);
    println!("  Loads:   {} item(s)", beam.loads.len());
    println!();
}
