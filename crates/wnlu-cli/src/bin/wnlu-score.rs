//! Score classifier outputs for Winograd NLI pairs.
//!
//! ## Usage
//!
//! ```bash
//! wnlu-score confidence_levels_winograd_devset.jsonl
//! WNLU_CONFIG=report.yaml wnlu-score confidence_levels_winograd_devset.jsonl
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use wnlu_ingestion::JsonlRecordSource;

#[derive(Debug, Parser)]
#[command(name = "wnlu-score", version, about = "Score Winograd NLI classifier confidences")]
struct Args {
    /// Classifier output, one JSON record per line
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = wnlu_cli::start()?;

    let source = JsonlRecordSource::new(&args.input);
    let run = wnlu_scorer::run(&source, &config.report)
        .with_context(|| format!("Failed to score {}", args.input.display()))?;
    info!(
        pairs = run.tally.total_pairs(),
        decisions = run.decisions.len(),
        "Scoring complete"
    );

    let report = run.report().render(&config.report)?;
    print!("{report}");
    if !report.ends_with('\n') {
        println!();
    }
    Ok(())
}
