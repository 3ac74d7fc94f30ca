//! presscalc - CLI tool to estimate print jobs from JSON job files.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use presscalc_core::{estimate_job, generate_report, load_job_file, validate_job};

/// Estimate sheet layouts, cutting plans and paper costs for print jobs.
#[derive(Parser, Debug)]
#[command(name = "presscalc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input job file path (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output report file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output the raw estimate as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    // Parse the input file
    let job = load_job_file(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!(
        "Loaded job '{}' with {} product(s)",
        job.name,
        job.products.len()
    );

    // Validate
    let validation = validate_job(&job)?;

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Estimate
    let estimate = estimate_job(&job)?;

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&estimate)?;
        println!("{}", json);
        return Ok(());
    }

    // Generate report
    let report = generate_report(&job, &estimate);

    // Write output
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("txt");
        path
    });

    std::fs::write(&output_path, &report)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!("Generated: {}", output_path.display());

    Ok(())
}
