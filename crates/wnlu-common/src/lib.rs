//! wnlu-common — Shared types, errors, and configuration used across all WNLU crates.

pub mod error;
pub mod labels;
pub mod confidence;
pub mod records;
pub mod config;

// Re-export commonly used types
pub use error::{Result, WnluError};
pub use labels::{GoldLabel, NliClass};
pub use confidence::ConfidenceTriple;
pub use records::{NliExample, NliOutputRecord};
pub use config::{ReportFormat, RunConfig};
