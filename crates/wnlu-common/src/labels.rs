//! NLI class labels and the two gold labels a Winograd pair can carry.

use serde::{Deserialize, Serialize};

/// The three NLI classes, in classifier output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NliClass {
    Entailment,
    Neutral,
    Contradiction,
}

impl NliClass {
    pub const ALL: [NliClass; 3] = [NliClass::Entailment, NliClass::Neutral, NliClass::Contradiction];

    pub fn as_str(&self) -> &'static str {
        match self {
            NliClass::Entailment    => "entailment",
            NliClass::Neutral       => "neutral",
            NliClass::Contradiction => "contradiction",
        }
    }

    /// Position of this class in a `[entailment, neutral, contradiction]` score row.
    pub fn index(&self) -> usize {
        match self {
            NliClass::Entailment    => 0,
            NliClass::Neutral       => 1,
            NliClass::Contradiction => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "entailment"    => Some(NliClass::Entailment),
            "neutral"       => Some(NliClass::Neutral),
            "contradiction" => Some(NliClass::Contradiction),
            _ => None,
        }
    }

    /// Highest-scoring class. Ties resolve to the earliest class.
    pub fn argmax(scores: &[f64; 3]) -> Self {
        let mut best = 0;
        for i in 1..scores.len() {
            if scores[i] > scores[best] {
                best = i;
            }
        }
        Self::ALL[best]
    }
}

impl std::fmt::Display for NliClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gold label of one candidate hypothesis within a Winograd pair.
///
/// The dataset construction only ever produces these two; `contradiction`
/// is not a valid gold label for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoldLabel {
    Entailment,
    Neutral,
}

impl GoldLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoldLabel::Entailment => "entailment",
            GoldLabel::Neutral    => "neutral",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "entailment" => Some(GoldLabel::Entailment),
            "neutral"    => Some(GoldLabel::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for GoldLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<GoldLabel> for NliClass {
    fn from(label: GoldLabel) -> Self {
        match label {
            GoldLabel::Entailment => NliClass::Entailment,
            GoldLabel::Neutral    => NliClass::Neutral,
        }
    }
}
