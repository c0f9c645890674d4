//! Shared fixtures for WNLU tests.

use std::path::PathBuf;

use tempfile::TempDir;
use wnlu_common::NliOutputRecord;

/// A small WSC collection: two usable schemata and one without a
/// recognisable correct answer.
pub const SAMPLE_WSC_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<collection>
  <schema>
    <text>
      <txt1>The city councilmen refused the demonstrators a permit because</txt1>
      <pron>they</pron>
      <txt2>feared violence.</txt2>
    </text>
    <quote><quote1></quote1><pron>they</pron><quote2>feared violence</quote2></quote>
    <answers>
      <answer>The city councilmen</answer>
      <answer>The demonstrators</answer>
    </answers>
    <correctAnswer>A</correctAnswer>
    <source>(Winograd 1972)</source>
  </schema>
  <schema>
    <text>
      <txt1>The trophy doesn't fit into the brown suitcase because</txt1>
      <pron>it</pron>
      <txt2>is too small.</txt2>
    </text>
    <answers>
      <answer>the trophy</answer>
      <answer>the suitcase</answer>
    </answers>
    <correctAnswer>B</correctAnswer>
  </schema>
  <schema>
    <text>
      <txt1>Paul tried to call George on the phone, but</txt1>
      <pron>he</pron>
      <txt2>wasn't available.</txt2>
    </text>
    <answers>
      <answer>Paul</answer>
      <answer>George</answer>
    </answers>
    <correctAnswer>?</correctAnswer>
  </schema>
</collection>
"#;

/// One classifier output record.
pub fn record(pair_id: &str, gold_label: &str, scores: [f64; 3]) -> NliOutputRecord {
    NliOutputRecord {
        pair_id: pair_id.to_string(),
        premise: format!("premise of {pair_id}"),
        hypothesis: format!("{gold_label} hypothesis of {pair_id}"),
        gold_label: gold_label.to_string(),
        entailment_confidence: scores[0],
        neutral_confidence: scores[1],
        contradiction_confidence: scores[2],
    }
}

/// The two records of a pair: entailment-gold with `e`, neutral-gold with `n`.
pub fn pair_records(pair_id: &str, e: [f64; 3], n: [f64; 3]) -> Vec<NliOutputRecord> {
    vec![record(pair_id, "entailment", e), record(pair_id, "neutral", n)]
}

/// Pair A is decided for the entailment side under every rule; pair B
/// has identical sides and ties under every rule.
pub fn two_pair_scenario() -> Vec<NliOutputRecord> {
    let mut records = pair_records("A", [0.9, 0.05, 0.05], [0.3, 0.6, 0.1]);
    records.extend(pair_records("B", [0.4, 0.4, 0.2], [0.4, 0.4, 0.2]));
    records
}

/// A file living in its own temporary directory, removed on drop.
pub struct TempFixture {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write `contents` verbatim to `name` in a fresh temporary directory.
pub fn write_fixture(name: &str, contents: &str) -> TempFixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    TempFixture { _dir: dir, path }
}

/// Serialise records one per line into a temporary `.jsonl` file.
pub fn write_records(records: &[NliOutputRecord]) -> TempFixture {
    let body: String = records
        .iter()
        .map(|r| serde_json::to_string(r).expect("serialise record") + "\n")
        .collect();
    write_fixture("confidence_levels.jsonl", &body)
}
