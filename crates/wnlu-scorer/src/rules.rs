//! Decision rules.
//!
//! Each rule reduces both mean triples to one scalar and compares them.
//! Equal scalars are a tie; equality is exact, with no epsilon.

use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregatedPair, MeanConfidence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// `E.e > N.e`
    EntailmentOnly,
    /// `E.e + E.n > N.e + N.n`
    EntailmentNeutral,
    /// `E.c < N.c`
    ContradictionOnly,
    /// `E.c + E.n < N.c + N.n`
    ContradictionNeutral,
}

impl ScoringRule {
    pub const ALL: [ScoringRule; 4] = [
        ScoringRule::EntailmentOnly,
        ScoringRule::EntailmentNeutral,
        ScoringRule::ContradictionOnly,
        ScoringRule::ContradictionNeutral,
    ];

    /// Human-readable label used in the text report.
    pub fn label(&self) -> &'static str {
        match self {
            ScoringRule::EntailmentOnly       => "Entailment only",
            ScoringRule::EntailmentNeutral    => "Entailment+neutral",
            ScoringRule::ContradictionOnly    => "Contradiction only",
            ScoringRule::ContradictionNeutral => "Contradiction+neutral",
        }
    }

    /// Stable key used in the JSON report.
    pub fn key(&self) -> &'static str {
        match self {
            ScoringRule::EntailmentOnly       => "entailment_only",
            ScoringRule::EntailmentNeutral    => "entailment_neutral",
            ScoringRule::ContradictionOnly    => "contradiction_only",
            ScoringRule::ContradictionNeutral => "contradiction_neutral",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ScoringRule::EntailmentOnly       => 0,
            ScoringRule::EntailmentNeutral    => 1,
            ScoringRule::ContradictionOnly    => 2,
            ScoringRule::ContradictionNeutral => 3,
        }
    }

    /// The scalar this rule compares.
    pub fn scalar(&self, mean: &MeanConfidence) -> f64 {
        match self {
            ScoringRule::EntailmentOnly       => mean.entailment,
            ScoringRule::EntailmentNeutral    => mean.entailment + mean.neutral,
            ScoringRule::ContradictionOnly    => mean.contradiction,
            ScoringRule::ContradictionNeutral => mean.contradiction + mean.neutral,
        }
    }

    /// Entailment rules want the entailment-gold side higher; contradiction
    /// rules want it lower.
    pub fn higher_is_better(&self) -> bool {
        matches!(self, ScoringRule::EntailmentOnly | ScoringRule::EntailmentNeutral)
    }

    /// Classify one pair from its two bucket means.
    pub fn decide(&self, entailment: &MeanConfidence, neutral: &MeanConfidence) -> Outcome {
        let e = self.scalar(entailment);
        let n = self.scalar(neutral);
        let correct = if self.higher_is_better() { e > n } else { e < n };
        if correct {
            Outcome::Correct
        } else if e == n {
            Outcome::Tied
        } else {
            Outcome::Incorrect
        }
    }
}

impl std::fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
    /// Both sides indistinguishable; discarded from strict accuracy.
    Tied,
}

/// All four rule outcomes for one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairDecision {
    pub pair_id: String,
    pub entailment: MeanConfidence,
    pub neutral: MeanConfidence,
    outcomes: [Outcome; 4],
}

impl PairDecision {
    pub fn outcome(&self, rule: ScoringRule) -> Outcome {
        self.outcomes[rule.index()]
    }

    pub fn outcomes(&self) -> impl Iterator<Item = (ScoringRule, Outcome)> + '_ {
        ScoringRule::ALL.iter().map(move |r| (*r, self.outcomes[r.index()]))
    }
}

/// Apply every rule to one aggregated pair.
pub fn decide_pair(pair: &AggregatedPair<'_>) -> PairDecision {
    let outcomes = ScoringRule::ALL.map(|rule| rule.decide(&pair.entailment, &pair.neutral));
    PairDecision {
        pair_id: pair.pair_id.to_string(),
        entailment: pair.entailment,
        neutral: pair.neutral,
        outcomes,
    }
}
