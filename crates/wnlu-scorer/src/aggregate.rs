//! Per-bucket mean confidences.

use wnlu_common::{ConfidenceTriple, GoldLabel, Result, WnluError};

use crate::grouper::{Instance, PairGroup};

/// Arithmetic mean of each confidence field across one bucket.
pub type MeanConfidence = ConfidenceTriple;

/// Mean confidence of a non-empty bucket.
pub fn mean_confidence(pair_id: &str, label: GoldLabel, bucket: &[Instance]) -> Result<MeanConfidence> {
    ConfidenceTriple::mean(bucket.iter().map(|i| &i.confidence)).ok_or_else(|| WnluError::EmptyBucket {
        pair_id: pair_id.to_string(),
        label: label.to_string(),
    })
}

/// Both bucket means of one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedPair<'a> {
    pub pair_id: &'a str,
    /// Mean over the entailment-gold bucket (E).
    pub entailment: MeanConfidence,
    /// Mean over the neutral-gold bucket (N).
    pub neutral: MeanConfidence,
}

pub fn aggregate_pair(group: &PairGroup) -> Result<AggregatedPair<'_>> {
    Ok(AggregatedPair {
        pair_id: &group.pair_id,
        entailment: mean_confidence(&group.pair_id, GoldLabel::Entailment, &group.entailment)?,
        neutral: mean_confidence(&group.pair_id, GoldLabel::Neutral, &group.neutral)?,
    })
}
