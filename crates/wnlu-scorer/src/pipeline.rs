//! Run driver: source → grouper → aggregator → decision engine → tally.

use tracing::{debug, info, instrument};
use wnlu_common::config::ReportConfig;
use wnlu_common::Result;
use wnlu_ingestion::{RecordSource, SourcedRecord};

use crate::aggregate::aggregate_pair;
use crate::grouper::{group_records, PairGroups};
use crate::report::Report;
use crate::rules::{decide_pair, PairDecision};
use crate::tally::Tally;

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct ScoringRun {
    pub source: String,
    pub tally: Tally,
    /// Per-pair decisions in first-seen order.
    pub decisions: Vec<PairDecision>,
}

impl ScoringRun {
    pub fn report(&self) -> Report {
        Report::from_tally(&self.tally, self.source.clone())
    }
}

/// Aggregate and decide every group. The first empty bucket aborts the run.
pub fn score_groups(groups: &PairGroups, per_pair: bool) -> Result<(Tally, Vec<PairDecision>)> {
    let mut tally = Tally::new();
    let mut decisions = Vec::with_capacity(groups.len());

    for group in groups.iter() {
        let aggregated = aggregate_pair(group)?;
        let decision = decide_pair(&aggregated);

        let outcomes: Vec<String> = decision
            .outcomes()
            .map(|(rule, outcome)| format!("{}={:?}", rule.key(), outcome))
            .collect();
        if per_pair {
            info!(
                pair_id = %decision.pair_id,
                premise = %group.premise,
                entailment = ?decision.entailment.as_array(),
                neutral = ?decision.neutral.as_array(),
                outcomes = %outcomes.join(" "),
                "Pair scored"
            );
        } else {
            debug!(
                pair_id = %decision.pair_id,
                premise = %group.premise,
                entailment = ?decision.entailment.as_array(),
                neutral = ?decision.neutral.as_array(),
                outcomes = %outcomes.join(" "),
                "Pair scored"
            );
        }

        tally.record(&decision);
        decisions.push(decision);
    }

    Ok((tally, decisions))
}

/// Validate, group and score already-loaded records.
pub fn score_records(
    records: Vec<SourcedRecord>,
    source: impl Into<String>,
    config: &ReportConfig,
) -> Result<ScoringRun> {
    let record_count = records.len();
    let groups = group_records(records)?;
    info!(records = record_count, pairs = groups.len(), "Grouped classifier outputs");

    let (tally, decisions) = score_groups(&groups, config.per_pair)?;
    Ok(ScoringRun { source: source.into(), tally, decisions })
}

/// Load everything from `source` and score it.
#[instrument(skip_all, fields(source = %source.describe()))]
pub fn run(source: &dyn RecordSource, config: &ReportConfig) -> Result<ScoringRun> {
    let records = source.load()?;
    score_records(records, source.describe(), config)
}
