//! Decision counters and the two accuracy formulas.

use serde::{Deserialize, Serialize};
use wnlu_common::{Result, WnluError};

use crate::rules::{Outcome, PairDecision, ScoringRule};

/// Counters for one rule. Incorrect is derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTally {
    pub correct: usize,
    pub discarded: usize,
}

/// Correct and discarded counts per rule plus the number of pairs seen.
/// Only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    total_pairs: usize,
    rules: [RuleTally; 4],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, decision: &PairDecision) {
        self.total_pairs += 1;
        for (rule, outcome) in decision.outcomes() {
            let counters = &mut self.rules[rule.index()];
            match outcome {
                Outcome::Correct   => counters.correct += 1,
                Outcome::Tied      => counters.discarded += 1,
                Outcome::Incorrect => {}
            }
        }
    }

    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    pub fn rule(&self, rule: ScoringRule) -> RuleTally {
        self.rules[rule.index()]
    }

    pub fn incorrect(&self, rule: ScoringRule) -> usize {
        let t = self.rule(rule);
        self.total_pairs - t.correct - t.discarded
    }

    /// `correct / (total - discarded)`.
    pub fn strict_accuracy(&self, rule: ScoringRule) -> Result<f64> {
        let t = self.rule(rule);
        let decidable = self.total_pairs - t.discarded;
        if decidable == 0 {
            return Err(WnluError::NoDecidablePairs { rule: rule.label().to_string() });
        }
        Ok(t.correct as f64 / decidable as f64)
    }

    /// `(correct + 0.5 * discarded) / total`.
    pub fn net_accuracy(&self, rule: ScoringRule) -> Result<f64> {
        if self.total_pairs == 0 {
            return Err(WnluError::NoPairs);
        }
        let t = self.rule(rule);
        Ok((t.correct as f64 + 0.5 * t.discarded as f64) / self.total_pairs as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{AggregatedPair, MeanConfidence};
    use crate::rules::decide_pair;

    fn decision(e: [f64; 3], n: [f64; 3]) -> PairDecision {
        decide_pair(&AggregatedPair {
            pair_id: "p",
            entailment: MeanConfidence::from_scores(e),
            neutral: MeanConfidence::from_scores(n),
        })
    }

    fn scenario() -> Tally {
        let mut tally = Tally::new();
        tally.record(&decision([0.9, 0.05, 0.05], [0.3, 0.6, 0.1]));
        tally.record(&decision([0.4, 0.4, 0.2], [0.4, 0.4, 0.2]));
        tally
    }

    #[test]
    fn test_two_pair_scenario() {
        let tally = scenario();
        let rule = ScoringRule::EntailmentOnly;
        assert_eq!(tally.total_pairs(), 2);
        assert_eq!(tally.rule(rule), RuleTally { correct: 1, discarded: 1 });
        assert_eq!(tally.incorrect(rule), 0);
        assert_eq!(tally.strict_accuracy(rule).unwrap(), 1.0);
        assert_eq!(tally.net_accuracy(rule).unwrap(), 0.75);
    }

    #[test]
    fn test_counts_partition_total() {
        let mut tally = scenario();
        tally.record(&decision([0.1, 0.1, 0.8], [0.7, 0.2, 0.1]));
        for rule in ScoringRule::ALL {
            let t = tally.rule(rule);
            assert_eq!(t.correct + t.discarded + tally.incorrect(rule), tally.total_pairs());
            let net = tally.net_accuracy(rule).unwrap();
            assert!((0.0..=1.0).contains(&net));
        }
    }

    #[test]
    fn test_all_discarded_strict_undefined() {
        let mut tally = Tally::new();
        tally.record(&decision([0.4, 0.4, 0.2], [0.4, 0.4, 0.2]));
        for rule in ScoringRule::ALL {
            match tally.strict_accuracy(rule).unwrap_err() {
                WnluError::NoDecidablePairs { rule: name } => assert_eq!(name, rule.label()),
                other => panic!("unexpected error: {other}"),
            }
            assert_eq!(tally.net_accuracy(rule).unwrap(), 0.5);
        }
    }

    #[test]
    fn test_strict_undefined_only_for_tied_rule() {
        let mut tally = Tally::new();
        // Equal entailment, different contradiction.
        tally.record(&decision([0.5, 0.2, 0.3], [0.5, 0.4, 0.1]));
        assert!(tally.strict_accuracy(ScoringRule::EntailmentOnly).is_err());
        assert_eq!(tally.strict_accuracy(ScoringRule::ContradictionOnly).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_run() {
        let tally = Tally::new();
        assert!(matches!(
            tally.net_accuracy(ScoringRule::EntailmentOnly),
            Err(WnluError::NoPairs)
        ));
        assert!(matches!(
            tally.strict_accuracy(ScoringRule::EntailmentOnly),
            Err(WnluError::NoDecidablePairs { .. })
        ));
    }
}
