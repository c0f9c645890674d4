//! Record sources.
//!
//! A source hands the scorer every classifier output record of a run,
//! each tagged with the input line it came from.

pub mod nli_output;
pub mod winograd;

use wnlu_common::{NliOutputRecord, Result};

/// A record plus the 1-based input line it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcedRecord {
    pub line: usize,
    pub record: NliOutputRecord,
}

/// Common interface for everything that can feed the scorer.
pub trait RecordSource {
    /// Load every record. Fails on the first malformed one.
    fn load(&self) -> Result<Vec<SourcedRecord>>;

    /// Human-readable origin, used in logs and reports.
    fn describe(&self) -> String;
}

/// Source over records already in memory. Line numbers are positions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSource {
    records: Vec<NliOutputRecord>,
}

impl InMemoryRecordSource {
    pub fn new(records: Vec<NliOutputRecord>) -> Self {
        Self { records }
    }

    /// Add a record.
    pub fn with(mut self, record: NliOutputRecord) -> Self {
        self.records.push(record);
        self
    }
}

impl RecordSource for InMemoryRecordSource {
    fn load(&self) -> Result<Vec<SourcedRecord>> {
        Ok(self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| SourcedRecord { line: i + 1, record: record.clone() })
            .collect())
    }

    fn describe(&self) -> String {
        format!("<{} in-memory records>", self.records.len())
    }
}

pub use nli_output::{parse_jsonl, JsonlRecordSource};
