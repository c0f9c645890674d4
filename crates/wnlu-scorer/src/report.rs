//! Report rendering.
//!
//! The text layout is two blocks: counts per rule, then accuracies per rule.
//! The JSON layout carries the same numbers plus run metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wnlu_common::config::ReportConfig;
use wnlu_common::{ReportFormat, Result, WnluError};

use crate::rules::ScoringRule;
use crate::tally::Tally;

const UNDEFINED_STRICT: &str = "undefined (no decidable pairs)";
const UNDEFINED_NET: &str = "undefined (no pairs)";

/// One rule's counts and accuracies. `None` marks an undefined accuracy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleReport {
    pub rule: ScoringRule,
    pub label: String,
    pub correct: usize,
    pub discarded: usize,
    pub incorrect: usize,
    pub strict_accuracy: Option<f64>,
    pub net_accuracy: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Where the scored records came from.
    pub source: String,
    pub total_pairs: usize,
    pub rules: Vec<RuleReport>,
}

impl Report {
    /// Snapshot a finished tally. Accuracy errors stay scoped to their rule.
    pub fn from_tally(tally: &Tally, source: impl Into<String>) -> Self {
        let rules = ScoringRule::ALL
            .iter()
            .map(|&rule| {
                let counts = tally.rule(rule);
                RuleReport {
                    rule,
                    label: rule.label().to_string(),
                    correct: counts.correct,
                    discarded: counts.discarded,
                    incorrect: tally.incorrect(rule),
                    strict_accuracy: tally.strict_accuracy(rule).ok(),
                    net_accuracy: tally.net_accuracy(rule).ok(),
                }
            })
            .collect();

        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            source: source.into(),
            total_pairs: tally.total_pairs(),
            rules,
        }
    }

    pub fn rule(&self, rule: ScoringRule) -> Option<&RuleReport> {
        self.rules.iter().find(|r| r.rule == rule)
    }

    pub fn render(&self, config: &ReportConfig) -> Result<String> {
        match config.format {
            ReportFormat::Text => Ok(self.render_text(config)),
            ReportFormat::Json => self.to_json(),
        }
    }

    pub fn render_text(&self, config: &ReportConfig) -> String {
        let mut report = String::new();
        report.push_str(&format!("\nTotal # of Winograd Schemas:  {}\n", self.total_pairs));
        for r in &self.rules {
            report.push_str(&format!(
                "{} - #correct:  {}  #discarded:  {}",
                r.label, r.correct, r.discarded
            ));
            if config.show_incorrect {
                report.push_str(&format!("  #incorrect:  {}", r.incorrect));
            }
            report.push('\n');
        }
        report.push('\n');
        for r in &self.rules {
            report.push_str(&format!(
                "{} - %acc:  {}  %net_acc:  {}\n",
                r.label,
                format_accuracy(r.strict_accuracy, config.precision, UNDEFINED_STRICT),
                format_accuracy(r.net_accuracy, config.precision, UNDEFINED_NET),
            ));
        }
        report.push('\n');
        report
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(WnluError::from)
    }
}

fn format_accuracy(value: Option<f64>, precision: Option<usize>, undefined: &str) -> String {
    match (value, precision) {
        (Some(v), Some(p)) => format!("{v:.p$}"),
        (Some(v), None)    => format!("{v:?}"),
        (None, _)          => undefined.to_string(),
    }
}
