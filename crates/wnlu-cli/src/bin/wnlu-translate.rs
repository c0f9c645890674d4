//! Convert a Winograd Schema Challenge XML collection into NLI examples.
//!
//! ```bash
//! wnlu-translate WSCollection.xml wsc_nli.jsonl
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wnlu_ingestion::translate::translate_file;

#[derive(Debug, Parser)]
#[command(name = "wnlu-translate", version, about = "Translate WSC XML into NLI examples (JSONL)")]
struct Args {
    /// WSC collection XML
    xml: PathBuf,
    /// Destination JSONL file
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = wnlu_cli::start()?;

    let translation = translate_file(&args.xml, &args.output, &config.translate)
        .with_context(|| format!("Failed to translate {}", args.xml.display()))?;

    println!(
        "Wrote {} examples to {} ({} schemata skipped)",
        translation.examples.len(),
        args.output.display(),
        translation.skipped.len()
    );
    Ok(())
}
