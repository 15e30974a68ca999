//! Report command implementation.
//!
//! The report command:
//! 1. Reads a saved users payload
//! 2. Decodes the `results` array
//! 3. Computes the statistics report
//! 4. Renders it and writes it to stdout or a file

use crate::aggregator::StatisticsReport;
use crate::output::{write_report, ResponseFormat};
use crate::parser::parse_users;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to a JSON payload with a `results` array
    pub input: PathBuf,

    pub format: ResponseFormat,

    /// Output path (stdout if None)
    pub output: Option<PathBuf>,
}

/// Validate report arguments before doing any work
///
/// **Public** - called by main.rs before execute_report
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if !args.input.exists() {
        bail!("Input file does not exist: {}", args.input.display());
    }
    if args.input.is_dir() {
        bail!("Input path is a directory: {}", args.input.display());
    }
    if let Some(output) = &args.output {
        if output == &args.input {
            bail!("Output path would overwrite the input: {}", output.display());
        }
    }
    Ok(())
}

/// Execute the report command and return the rendered report
///
/// **Public** - main entry point for offline reports
pub fn execute_report(args: ReportArgs) -> Result<String> {
    debug!("Reading users payload from {}", args.input.display());

    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let users = parse_users(&bytes).context("Failed to decode users payload")?;
    let report = StatisticsReport::compute(&users).context("Failed to compute statistics")?;
    let rendered = args.format.render(&report)?;

    info!("Computed statistics for {} users", report.user_count);

    match &args.output {
        Some(path) => write_report(&rendered, path)?,
        None => print!("{}", rendered),
    }

    Ok(rendered)
}
