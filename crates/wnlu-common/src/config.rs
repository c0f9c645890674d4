//! Run configuration.
//!
//! Read from the file named by `WNLU_CONFIG`, else `wnlu.toml` in the
//! working directory when present, else built-in defaults. TOML, YAML and
//! JSON are accepted, chosen by file extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WnluError};

pub const CONFIG_ENV_VAR: &str = "WNLU_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "wnlu.toml";

/// Complete run configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub translate: TranslateConfig,

    #[serde(default)]
    pub harness: HarnessConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// ── Report ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format (text, json)
    #[serde(default)]
    pub format: ReportFormat,

    /// Fixed number of decimals for accuracies; shortest round-trip form when unset
    #[serde(default)]
    pub precision: Option<usize>,

    /// Add the derived incorrect count to the text report
    #[serde(default)]
    pub show_incorrect: bool,

    /// Log every pair's mean confidences and decisions at info level
    #[serde(default)]
    pub per_pair: bool,
}

// ── Translate ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Prefix for generated pair ids, followed by the schema index
    #[serde(default = "default_pair_id_prefix")]
    pub pair_id_prefix: String,

    /// Genre written on every generated example
    #[serde(default = "default_genre")]
    pub genre: String,
}

fn default_pair_id_prefix() -> String { "wsc-".to_string() }
fn default_genre() -> String { "winograd".to_string() }

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            pair_id_prefix: default_pair_id_prefix(),
            genre: default_genre(),
        }
    }
}

// ── Harness ──────────────────────────────────────────────────────────────────

/// Settings for library callers of `wnlu-harness`. Neither binary runs a
/// classifier, so nothing here is read on the command-line path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Batch size handed to `evaluate_classifier`.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize { 32 }

impl Default for HarnessConfig {
    fn default() -> Self {
        Self { batch_size: default_batch_size() }
    }
}

// ── Logging ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` overrides it
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "wnlu=info,warn".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl RunConfig {
    /// Resolve and load the configuration for this process.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_path(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_path(DEFAULT_CONFIG_FILE),
            Err(_) => {
                debug!("No configuration file found; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a file, picking the parser by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WnluError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("toml")
            .to_ascii_lowercase();

        let config = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "json" => serde_json::from_str(&content)
                .map_err(|e| WnluError::Config(format!("{}: {e}", path.display())))?,
            _ => Self::from_toml_str(&content)?,
        };
        config.validate()?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WnluError::Config(e.to_string()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| WnluError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.harness.batch_size == 0 {
            return Err(WnluError::Config("harness.batch_size must be positive".into()));
        }
        if matches!(self.report.precision, Some(p) if p > 17) {
            return Err(WnluError::Config("report.precision must be at most 17".into()));
        }
        Ok(())
    }

    /// Path the configuration would be loaded from, if any.
    pub fn resolved_path() -> Option<PathBuf> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                p.exists().then_some(p)
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
