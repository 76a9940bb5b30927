//! Batch entry point for the CLI

use crate::cli_bin::args::Cli;
use log::{info, warn};
use matterfmt::io::resolve_paths;
use matterfmt::{BatchConfig, BatchProcessor, BatchSummary, MatterFmtError, OutputTarget, Result};
use std::io::IsTerminal;

/// Convert every file named on the command line or on stdin
pub fn run(cli: &Cli) -> Result<BatchSummary> {
    let processor = create_processor(cli)?;

    if cli.paths.is_empty() {
        let stdin = std::io::stdin();
        ensure_piped(stdin.is_terminal())?;
        return processor.run(stdin.lock());
    }

    let files = resolve_paths(&cli.paths, &cli.suffix);
    if files.is_empty() {
        warn!("No files found to process");
    }
    processor.run_paths(&files)
}

fn create_processor(cli: &Cli) -> Result<BatchProcessor> {
    if cli.suffix.is_empty() {
        return Err(MatterFmtError::invalid_argument(
            "--suffix must not be empty, sources are never overwritten",
        ));
    }

    let output = if cli.stdout {
        OutputTarget::Stdout
    } else {
        OutputTarget::File
    };

    Ok(BatchProcessor::with_config(BatchConfig {
        suffix: cli.suffix.clone(),
        output,
    }))
}

/// Paths are read from stdin only when something is piped in
fn ensure_piped(stdin_is_terminal: bool) -> Result<()> {
    if stdin_is_terminal {
        return Err(MatterFmtError::NoInput);
    }
    Ok(())
}

/// Log the outcome of a finished batch
pub fn report(summary: &BatchSummary) {
    for result in &summary.results {
        if let Some(dest) = &result.destination {
            info!("{} -> {}", result.source.display(), dest.display());
        }
    }
    info!("Processed {} files", summary.converted());
}
