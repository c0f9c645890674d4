//! wnlu-scorer — Confidence aggregation and decision scoring for Winograd NLI outputs.
//! Groups classifier outputs by pair, averages each label bucket, applies the
//! four decision rules and reports strict and net accuracy.

pub mod grouper;
pub mod aggregate;
pub mod rules;
pub mod tally;
pub mod report;
pub mod pipeline;

pub use aggregate::{AggregatedPair, MeanConfidence};
pub use grouper::{Instance, PairGroup, PairGroups};
pub use pipeline::{run, score_records, ScoringRun};
pub use report::{Report, RuleReport};
pub use rules::{Outcome, PairDecision, ScoringRule};
pub use tally::{RuleTally, Tally};
