//! Record shapes shared between the translator, the harness and the scorer.

use serde::{Deserialize, Serialize};

use crate::confidence::ConfidenceTriple;
use crate::labels::NliClass;

/// One NLI example as fed to a classifier (MultiNLI field layout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NliExample {
    #[serde(rename = "pairID")]
    pub pair_id: String,
    #[serde(rename = "sentence1")]
    pub premise: String,
    #[serde(rename = "sentence2")]
    pub hypothesis: String,
    #[serde(rename = "gold_label")]
    pub label: NliClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// One classifier output line: the scorer's input record.
///
/// `gold_label` stays a raw string here; it is validated when instances
/// are grouped so the error can name the pair and line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NliOutputRecord {
    #[serde(rename = "pairID")]
    pub pair_id: String,
    pub premise: String,
    /// Optional; the scorer never reads it.
    #[serde(default)]
    pub hypothesis: String,
    pub gold_label: String,
    pub entailment_confidence: f64,
    pub neutral_confidence: f64,
    pub contradiction_confidence: f64,
}

impl NliOutputRecord {
    /// Output record for `example` given the classifier's score row.
    pub fn from_example(example: &NliExample, scores: [f64; 3]) -> Self {
        Self {
            pair_id: example.pair_id.clone(),
            premise: example.premise.clone(),
            hypothesis: example.hypothesis.clone(),
            gold_label: example.label.as_str().to_string(),
            entailment_confidence: scores[0],
            neutral_confidence: scores[1],
            contradiction_confidence: scores[2],
        }
    }

    pub fn confidence(&self) -> ConfidenceTriple {
        ConfidenceTriple::new(
            self.entailment_confidence,
            self.neutral_confidence,
            self.contradiction_confidence,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_record_field_names() {
        let line = r#"{"pairID":"wsc-0","premise":"p","hypothesis":"h","gold_label":"neutral","entailment_confidence":0.1,"neutral_confidence":0.7,"contradiction_confidence":0.2}"#;
        let rec: NliOutputRecord = serde_json::from_str(line).unwrap();
        assert_eq!(rec.pair_id, "wsc-0");
        assert_eq!(rec.gold_label, "neutral");
        assert_eq!(rec.confidence(), ConfidenceTriple::new(0.1, 0.7, 0.2));

        let back = serde_json::to_value(&rec).unwrap();
        assert!(back.get("pairID").is_some());
        assert!(back.get("pair_id").is_none());
    }

    #[test]
    fn test_missing_hypothesis_defaults_to_empty() {
        let line = r#"{"pairID":"wsc-0","premise":"p","gold_label":"entailment","entailment_confidence":0.6,"neutral_confidence":0.3,"contradiction_confidence":0.1}"#;
        let rec: NliOutputRecord = serde_json::from_str(line).unwrap();
        assert_eq!(rec.hypothesis, "");
        assert_eq!(rec.premise, "p");
    }

    #[test]
    fn test_missing_confidence_is_rejected() {
        let line = r#"{"pairID":"wsc-0","premise":"p","gold_label":"neutral","entailment_confidence":0.1}"#;
        assert!(serde_json::from_str::<NliOutputRecord>(line).is_err());
    }

    #[test]
    fn test_example_uses_multinli_layout() {
        let ex = NliExample {
            pair_id: "wsc-3".into(),
            premise: "The trophy didn't fit because it was too big.".into(),
            hypothesis: "The trophy was too big.".into(),
            label: NliClass::Entailment,
            genre: Some("winograd".into()),
        };
        let v = serde_json::to_value(&ex).unwrap();
        assert_eq!(v["sentence1"], "The trophy didn't fit because it was too big.");
        assert_eq!(v["gold_label"], "entailment");
        assert_eq!(v["genre"], "winograd");
    }

    #[test]
    fn test_from_example_copies_scores_verbatim() {
        let ex = NliExample {
            pair_id: "wsc-1".into(),
            premise: "p".into(),
            hypothesis: "h".into(),
            label: NliClass::Neutral,
            genre: None,
        };
        let rec = NliOutputRecord::from_example(&ex, [0.25, 0.5, 0.25]);
        assert_eq!(rec.gold_label, "neutral");
        assert_eq!(rec.neutral_confidence, 0.5);
    }
}
