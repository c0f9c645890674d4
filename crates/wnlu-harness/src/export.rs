//! Confidence dumps and Kaggle-style prediction files.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use wnlu_common::{NliClass, NliExample, NliOutputRecord, Result, WnluError};
use wnlu_ingestion::sources::nli_output::write_jsonl;

use crate::classifier::NliClassifier;

/// Write one scorer input record per example and return argmax accuracy.
///
/// Every example is exported; there is no minibatch truncation here.
pub fn export_confidences<W: Write>(
    classifier: &dyn NliClassifier,
    eval_set: &[NliExample],
    writer: W,
) -> Result<f64> {
    if eval_set.is_empty() {
        return Err(WnluError::InvalidInput("evaluation set is empty".into()));
    }
    let output = classifier.classify(eval_set)?;
    output.check_len(eval_set.len())?;

    let records: Vec<NliOutputRecord> = eval_set
        .iter()
        .zip(&output.scores)
        .map(|(ex, scores)| NliOutputRecord::from_example(ex, *scores))
        .collect();
    write_jsonl(writer, &records)?;

    let correct = eval_set
        .iter()
        .zip(output.predictions())
        .filter(|(ex, pred)| ex.label == *pred)
        .count();
    info!(records = records.len(), correct, "Exported confidences");
    Ok(correct as f64 / eval_set.len() as f64)
}

/// One row of a Kaggle submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KagglePrediction {
    #[serde(rename = "pairID")]
    pub pair_id: String,
    pub gold_label: NliClass,
}

/// Argmax prediction for every example.
pub fn predict(classifier: &dyn NliClassifier, eval_set: &[NliExample]) -> Result<Vec<KagglePrediction>> {
    let output = classifier.classify(eval_set)?;
    output.check_len(eval_set.len())?;
    Ok(eval_set
        .iter()
        .zip(output.predictions())
        .map(|(ex, label)| KagglePrediction { pair_id: ex.pair_id.clone(), gold_label: label })
        .collect())
}

/// Write predictions as CSV with a `pairID,gold_label` header.
#[instrument(skip(rows), fields(path = %path.display(), rows = rows.len()))]
pub fn write_kaggle_predictions(path: &Path, rows: &[KagglePrediction]) -> Result<()> {
    let csv_err = |e: csv::Error| WnluError::Csv(e.to_string());
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    if rows.is_empty() {
        writer.write_record(["pairID", "gold_label"]).map_err(csv_err)?;
    }
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush()?;
    Ok(())
}
