//! Accuracy and cost over an evaluation set.
//!
//! Scoring walks only the full minibatches (`floor(len / batch) * batch`
//! examples); the trailing partial batch is skipped but still counted in
//! the denominator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wnlu_common::{NliExample, Result, WnluError};

use crate::classifier::{ClassifierOutput, NliClassifier};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub accuracy: f64,
    /// Summed cost divided by the batch size.
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreEvaluation {
    pub accuracy: BTreeMap<String, f64>,
    pub cost: f64,
}

/// `[correct, total]` for one token length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBucket {
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthEvaluation {
    pub accuracy: f64,
    /// Keyed by whitespace token count of the premise.
    pub by_premise_length: BTreeMap<usize, LengthBucket>,
    /// Keyed by whitespace token count of the hypothesis.
    pub by_hypothesis_length: BTreeMap<usize, LengthBucket>,
}

fn full_batch(len: usize, batch_size: usize) -> Result<usize> {
    if batch_size == 0 {
        return Err(WnluError::InvalidInput("batch_size must be greater than 0".into()));
    }
    Ok(len / batch_size * batch_size)
}

fn classify_checked(
    classifier: &dyn NliClassifier,
    eval_set: &[NliExample],
) -> Result<ClassifierOutput> {
    if eval_set.is_empty() {
        return Err(WnluError::InvalidInput("evaluation set is empty".into()));
    }
    let output = classifier.classify(eval_set)?;
    output.check_len(eval_set.len())?;
    Ok(output)
}

pub fn evaluate_classifier(
    classifier: &dyn NliClassifier,
    eval_set: &[NliExample],
    batch_size: usize,
) -> Result<Evaluation> {
    let window = full_batch(eval_set.len(), batch_size)?;
    let output = classify_checked(classifier, eval_set)?;
    let predictions = output.predictions();

    let correct = eval_set[..window]
        .iter()
        .zip(&predictions)
        .filter(|(ex, pred)| ex.label == **pred)
        .count();

    debug!(correct, scored = window, total = eval_set.len(), "Evaluated classifier");
    Ok(Evaluation {
        accuracy: correct as f64 / eval_set.len() as f64,
        cost: output.cost / batch_size as f64,
    })
}

/// Accuracy per genre reported by the classifier. Genres with no example
/// inside the full-batch window are omitted.
pub fn evaluate_classifier_by_genre(
    classifier: &dyn NliClassifier,
    eval_set: &[NliExample],
    batch_size: usize,
) -> Result<GenreEvaluation> {
    let window = full_batch(eval_set.len(), batch_size)?;
    let output = classify_checked(classifier, eval_set)?;
    let predictions = output.predictions();

    let mut counts: BTreeMap<String, LengthBucket> = BTreeMap::new();
    for (i, ex) in eval_set[..window].iter().enumerate() {
        let genre = &output.genres[i];
        let bucket = counts.entry(genre.clone()).or_default();
        bucket.total += 1;
        if ex.label == predictions[i] {
            bucket.correct += 1;
        }
        if ex.genre.as_deref() != Some(genre.as_str()) {
            warn!(
                pair_id = %ex.pair_id,
                classifier_genre = %genre,
                example_genre = ?ex.genre,
                "Genre mismatch between classifier output and example"
            );
        }
    }

    let accuracy = counts
        .into_iter()
        .map(|(genre, b)| (genre, b.correct as f64 / b.total as f64))
        .collect();
    Ok(GenreEvaluation { accuracy, cost: output.cost / batch_size as f64 })
}

fn token_len(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Accuracy with premise/hypothesis length breakdowns, one entry per set.
pub fn evaluate_by_length(
    classifier: &dyn NliClassifier,
    eval_sets: &[Vec<NliExample>],
    batch_size: usize,
) -> Result<Vec<LengthEvaluation>> {
    let mut results = Vec::with_capacity(eval_sets.len());
    for eval_set in eval_sets {
        let window = full_batch(eval_set.len(), batch_size)?;
        let output = classify_checked(classifier, eval_set)?;
        let predictions = output.predictions();

        let mut correct = 0;
        let mut by_premise: BTreeMap<usize, LengthBucket> = BTreeMap::new();
        let mut by_hypothesis: BTreeMap<usize, LengthBucket> = BTreeMap::new();
        for (ex, pred) in eval_set[..window].iter().zip(&predictions) {
            let hit = ex.label == *pred;
            for bucket in [
                by_premise.entry(token_len(&ex.premise)).or_default(),
                by_hypothesis.entry(token_len(&ex.hypothesis)).or_default(),
            ] {
                bucket.total += 1;
                if hit {
                    bucket.correct += 1;
                }
            }
            if hit {
                correct += 1;
            }
        }

        results.push(LengthEvaluation {
            accuracy: correct as f64 / eval_set.len() as f64,
            by_premise_length: by_premise,
            by_hypothesis_length: by_hypothesis,
        });
    }
    Ok(results)
}
