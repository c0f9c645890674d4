//! wnlu-ingestion — Dataset ingestion for the Winograd NLI pipeline.
//! - Winograd Schema Challenge XML parsing
//! - Expansion of schemata into NLI premise/hypothesis examples
//! - Classifier output (JSONL) record sources

pub mod models;
pub mod sources;
pub mod translate;

pub use models::WinogradSchema;
pub use sources::{InMemoryRecordSource, JsonlRecordSource, RecordSource, SourcedRecord};
