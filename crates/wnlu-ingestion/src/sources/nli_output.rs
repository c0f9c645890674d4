//! Newline-delimited JSON reader and writer.
//!
//! Expected record fields:
//! - pairID: Winograd pair identifier
//! - premise, hypothesis: the NLI sentence pair
//! - gold_label: "entailment" or "neutral"
//! - entailment_confidence, neutral_confidence, contradiction_confidence

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};
use wnlu_common::{NliOutputRecord, Result, WnluError};

use super::{RecordSource, SourcedRecord};

/// Classifier output file on disk.
#[derive(Debug, Clone)]
pub struct JsonlRecordSource {
    path: PathBuf,
}

impl JsonlRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonlRecordSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<SourcedRecord>> {
        let file = File::open(&self.path)?;
        let records = parse_jsonl(BufReader::new(file))?;
        debug!(n_records = records.len(), "Parsed classifier output");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse every non-blank line as one record.
///
/// The first line that is not valid JSON (invalid UTF-8 included), or lacks
/// a required field, fails the whole read with its line number.
pub fn parse_jsonl<R: BufRead>(reader: R) -> Result<Vec<SourcedRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let record: NliOutputRecord = serde_json::from_slice(&line).map_err(|e| {
            WnluError::MalformedInput { line: idx + 1, reason: e.to_string() }
        })?;
        records.push(SourcedRecord { line: idx + 1, record });
    }
    Ok(records)
}

/// Write one JSON document per line.
pub fn write_jsonl<T: Serialize, W: Write>(writer: W, items: &[T]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = r#"{"pairID":"1","premise":"p","hypothesis":"h1","gold_label":"entailment","entailment_confidence":0.9,"neutral_confidence":0.05,"contradiction_confidence":0.05}
{"pairID":"1","premise":"p","hypothesis":"h2","gold_label":"neutral","entailment_confidence":0.3,"neutral_confidence":0.6,"contradiction_confidence":0.1}
"#;

    #[test]
    fn test_parse_good_lines() {
        let records = parse_jsonl(GOOD.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].line, 2);
        assert_eq!(records[1].record.hypothesis, "h2");
    }

    #[test]
    fn test_blank_lines_skipped_but_counted() {
        let input = format!("\n   \n{GOOD}");
        let records = parse_jsonl(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 3);
    }

    #[test]
    fn test_bad_json_names_line() {
        let input = format!("{GOOD}{{not json}}\n");
        match parse_jsonl(input.as_bytes()).unwrap_err() {
            WnluError::MalformedInput { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_names_line() {
        let mut input = GOOD.lines().next().unwrap().as_bytes().to_vec();
        input.extend_from_slice(b"\n{\"pairID\":\"\xff\"}\n");
        match parse_jsonl(input.as_slice()).unwrap_err() {
            WnluError::MalformedInput { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let input = r#"{"pairID":"1","premise":"p","gold_label":"neutral"}"#;
        let err = parse_jsonl(input.as_bytes()).unwrap_err();
        assert!(matches!(err, WnluError::MalformedInput { line: 1, .. }));
        assert!(err.to_string().contains("entailment_confidence"), "{err}");
    }

    #[test]
    fn test_write_then_read() {
        let records: Vec<NliOutputRecord> = parse_jsonl(GOOD.as_bytes())
            .unwrap()
            .into_iter()
            .map(|r| r.record)
            .collect();
        let mut out = Vec::new();
        write_jsonl(&mut out, &records).unwrap();
        let again = parse_jsonl(out.as_slice()).unwrap();
        assert_eq!(again.len(), 2);
        assert_eq!(again[0].record, records[0]);
    }
}
