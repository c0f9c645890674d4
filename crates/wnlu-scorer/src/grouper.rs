//! Pair grouping.
//!
//! Two phases: every record's gold label is validated first, then the
//! validated instances are partitioned by pair id and label. A bad label
//! therefore fails the run before any group is built.

use std::collections::HashMap;

use wnlu_common::{ConfidenceTriple, GoldLabel, Result, WnluError};
use wnlu_ingestion::SourcedRecord;

/// One validated classifier output.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub pair_id: String,
    pub gold_label: GoldLabel,
    pub premise: String,
    pub hypothesis: String,
    pub confidence: ConfidenceTriple,
    /// Input line the instance was read from.
    pub line: usize,
}

impl Instance {
    /// Validate a raw record's gold label.
    pub fn from_sourced(sourced: SourcedRecord) -> Result<Self> {
        let SourcedRecord { line, record } = sourced;
        let gold_label = GoldLabel::parse(&record.gold_label).ok_or_else(|| {
            WnluError::UnknownGoldLabel {
                line,
                pair_id: record.pair_id.clone(),
                label: record.gold_label.clone(),
            }
        })?;
        let confidence = record.confidence();
        Ok(Self {
            pair_id: record.pair_id,
            gold_label,
            premise: record.premise,
            hypothesis: record.hypothesis,
            confidence,
            line,
        })
    }
}

/// All instances sharing one pair id, split by gold label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairGroup {
    pub pair_id: String,
    /// Premise of the first instance seen for this pair.
    pub premise: String,
    pub entailment: Vec<Instance>,
    pub neutral: Vec<Instance>,
}

impl PairGroup {
    pub fn bucket(&self, label: GoldLabel) -> &[Instance] {
        match label {
            GoldLabel::Entailment => &self.entailment,
            GoldLabel::Neutral    => &self.neutral,
        }
    }

    pub fn instance_count(&self) -> usize {
        self.entailment.len() + self.neutral.len()
    }
}

/// Pair groups in first-seen order of their pair id.
#[derive(Debug, Clone, Default)]
pub struct PairGroups {
    groups: Vec<PairGroup>,
    index: HashMap<String, usize>,
}

impl PairGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairGroup> {
        self.groups.iter()
    }

    pub fn get(&self, pair_id: &str) -> Option<&PairGroup> {
        self.index.get(pair_id).map(|&i| &self.groups[i])
    }

    /// Total instances across every group.
    pub fn instance_count(&self) -> usize {
        self.groups.iter().map(PairGroup::instance_count).sum()
    }
}

/// Phase one: validate every record. Fails on the first unknown gold label.
pub fn validate_records(records: Vec<SourcedRecord>) -> Result<Vec<Instance>> {
    records.into_iter().map(Instance::from_sourced).collect()
}

/// Phase two: partition validated instances. Never drops or duplicates.
pub fn group_instances(instances: Vec<Instance>) -> PairGroups {
    let mut groups = PairGroups::default();
    for instance in instances {
        let slot = match groups.index.get(&instance.pair_id) {
            Some(&i) => i,
            None => {
                groups.groups.push(PairGroup {
                    pair_id: instance.pair_id.clone(),
                    premise: instance.premise.clone(),
                    ..Default::default()
                });
                let i = groups.groups.len() - 1;
                groups.index.insert(instance.pair_id.clone(), i);
                i
            }
        };
        let group = &mut groups.groups[slot];
        match instance.gold_label {
            GoldLabel::Entailment => group.entailment.push(instance),
            GoldLabel::Neutral    => group.neutral.push(instance),
        }
    }
    groups
}

/// Validate then group.
pub fn group_records(records: Vec<SourcedRecord>) -> Result<PairGroups> {
    let instances = validate_records(records)?;
    Ok(group_instances(instances))
}
