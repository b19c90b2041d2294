//! Jacobi - Linear System Solver
//!
//! Solves 3x3 systems of linear equations by Jacobi iteration.
//!
//! # Usage
//!
//! ```bash
//! jacobi -e "x - 2y - 3z = -1" -e "2x + y + z = 6" -e "x + 3y - 2z = 13"
//! jacobi system.txt --max-iterations 200 --export iterations.csv
//! jacobi --example --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jacobi_core::{
    equation,
    error::Result,
    report::DISPLAY_ITERATION_LIMIT,
    Solver, SolverConfig, EXAMPLE_SYSTEM,
};
use log::info;

/// Output format for the solve report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Summary and iteration table
    Text,
    /// Full report as JSON
    Json,
}

/// Jacobi iterative solver for 3x3 linear systems
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a system file with one equation per line
    #[arg(value_name = "SYSTEM_FILE", conflicts_with_all = ["equations", "example"])]
    system_file: Option<PathBuf>,

    /// An equation of the system (repeat three times)
    #[arg(short = 'e', long = "equation", value_name = "EQUATION", conflicts_with = "example")]
    equations: Vec<String>,

    /// Solve the built-in example system
    #[arg(long)]
    example: bool,

    /// Tolerance (reserved; convergence uses the 4-decimal plateau rule)
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Maximum number of iterations
    #[arg(short, long)]
    max_iterations: Option<usize>,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the complete iteration table to a CSV file
    #[arg(long, value_name = "CSV_FILE")]
    export: Option<PathBuf>,

    /// Print every iteration instead of the first 50
    #[arg(long)]
    all_rows: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Build the configuration: file first, flags override
    let mut config = match &args.config {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    };
    if let Some(tolerance) = args.tolerance {
        config = config.with_tolerance(tolerance);
    }
    if let Some(max_iterations) = args.max_iterations {
        config = config.with_max_iterations(max_iterations);
    }

    // Collect the equations
    let equations: Vec<String> = if let Some(path) = &args.system_file {
        equation::read_equations(&equation::read_file(path)?)
    } else if args.example {
        EXAMPLE_SYSTEM.iter().map(|s| s.to_string()).collect()
    } else {
        args.equations.clone()
    };

    // Solve
    let solver = Solver::with_config(config);
    let report = solver.solve_equations(&equations)?;
    let table = report.table();

    match args.format {
        OutputFormat::Text => {
            println!("{}", report);
            println!();
            let limit = if args.all_rows {
                None
            } else {
                Some(DISPLAY_ITERATION_LIMIT)
            };
            println!("{}", table.render(limit));
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(path) = &args.export {
        table.export_csv(path)?;
        info!("Iteration table written to {}", path.display());
    }

    Ok(())
}
