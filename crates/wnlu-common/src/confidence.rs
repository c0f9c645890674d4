//! Confidence triples over the three NLI classes.

use serde::{Deserialize, Serialize};

use crate::labels::NliClass;

/// Per-class confidence produced by an NLI classifier for one example,
/// or the bucket-level mean of several of them.
///
/// Values are kept exactly as given; nothing here normalises them to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceTriple {
    pub entailment: f64,
    pub neutral: f64,
    pub contradiction: f64,
}

impl ConfidenceTriple {
    pub fn new(entailment: f64, neutral: f64, contradiction: f64) -> Self {
        Self { entailment, neutral, contradiction }
    }

    /// Build from a `[entailment, neutral, contradiction]` score row.
    pub fn from_scores(scores: [f64; 3]) -> Self {
        Self::new(scores[0], scores[1], scores[2])
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.entailment, self.neutral, self.contradiction]
    }

    pub fn get(&self, class: NliClass) -> f64 {
        self.as_array()[class.index()]
    }

    /// Arithmetic mean of each field. Returns `None` for an empty input
    /// rather than a triple of NaNs.
    pub fn mean<'a, I>(triples: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a ConfidenceTriple>,
    {
        let mut sum = [0.0f64; 3];
        let mut count = 0usize;
        for t in triples {
            sum[0] += t.entailment;
            sum[1] += t.neutral;
            sum[2] += t.contradiction;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Self::new(sum[0] / n, sum[1] / n, sum[2] / n))
    }
}
