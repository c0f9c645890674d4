use thiserror::Error;

#[derive(Debug, Error)]
pub enum WnluError {
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Unknown gold label {label:?} for pair {pair_id} (line {line}); expected \"entailment\" or \"neutral\"")]
    UnknownGoldLabel {
        line: usize,
        pair_id: String,
        label: String,
    },

    #[error("Pair {pair_id} has no {label} instances to aggregate")]
    EmptyBucket { pair_id: String, label: String },

    #[error("No decidable pairs under rule '{rule}': every pair was discarded as a tie")]
    NoDecidablePairs { rule: String },

    #[error("No Winograd pairs were scored")]
    NoPairs,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, WnluError>;
