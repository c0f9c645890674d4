//! Winograd collection → NLI examples.

use std::fs::File;
use std::path::Path;

use tracing::{info, instrument, warn};
use wnlu_common::config::TranslateConfig;
use wnlu_common::{NliExample, Result};

use crate::models::WinogradSchema;
use crate::sources::nli_output::write_jsonl;
use crate::sources::winograd::load_xml;

/// Outcome of translating one collection.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    pub examples: Vec<NliExample>,
    /// Pair ids of schemata skipped for lack of a usable correct answer.
    pub skipped: Vec<String>,
}

/// Expand every schema into its NLI examples. Pair ids are
/// `<pair_id_prefix><index>` over collection order.
pub fn translate_collection(schemata: &[WinogradSchema], config: &TranslateConfig) -> Translation {
    let mut translation = Translation::default();
    for (index, schema) in schemata.iter().enumerate() {
        let pair_id = format!("{}{}", config.pair_id_prefix, index);
        let examples = schema.to_nli_examples(&pair_id, &config.genre);
        if examples.is_empty() {
            warn!(%pair_id, "Skipping schema without a usable correct answer");
            translation.skipped.push(pair_id);
            continue;
        }
        translation.examples.extend(examples);
    }
    translation
}

/// Write examples as JSONL in the MultiNLI field layout.
pub fn write_nli_jsonl(path: &Path, examples: &[NliExample]) -> Result<()> {
    write_jsonl(File::create(path)?, examples)
}

/// Read a WSC XML file and write its NLI examples as JSONL.
#[instrument(skip(config))]
pub fn translate_file(xml_path: &Path, output: &Path, config: &TranslateConfig) -> Result<Translation> {
    let schemata = load_xml(xml_path)?;
    let translation = translate_collection(&schemata, config);
    write_nli_jsonl(output, &translation.examples)?;
    info!(
        schemata = schemata.len(),
        examples = translation.examples.len(),
        skipped = translation.skipped.len(),
        "Wrote NLI examples"
    );
    Ok(translation)
}
