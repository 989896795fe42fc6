//! Simulation configuration.
//!
//! Loaded from a TOML file with serde defaults; every field can also be
//! overridden by a CLI flag. A missing configuration file is not an
//! error; the defaults describe the canonical run (100 trades, 20%
//! error rate, seed 42, shuffled external order).

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Simulation run configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Seed for the run's random source.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of internal trades to generate.
    #[serde(default = "default_trade_count")]
    pub trade_count: usize,

    /// Fraction of records receiving a discrepancy, in `[0, 1]`.
    #[serde(default = "default_error_rate")]
    pub error_rate: f64,

    /// Whether the external dataset's row order is shuffled.
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,

    /// Skip all network lookups and use the deterministic built-in data.
    #[serde(default)]
    pub offline: bool,

    /// Directory the two dataset files are written to.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory confirmation documents are written to.
    #[serde(default = "default_confirmation_dir")]
    pub confirmation_dir: PathBuf,

    /// Custom quote endpoint; the built-in default when absent.
    pub quote_url: Option<String>,

    /// Custom constituent list endpoint; the built-in default when absent.
    pub universe_url: Option<String>,
}

fn default_seed() -> u64 {
    42
}

fn default_trade_count() -> usize {
    100
}

fn default_error_rate() -> f64 {
    0.20
}

fn default_shuffle() -> bool {
    true
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_confirmation_dir() -> PathBuf {
    PathBuf::from("confirmations")
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            trade_count: default_trade_count(),
            error_rate: default_error_rate(),
            shuffle: default_shuffle(),
            offline: false,
            data_dir: default_data_dir(),
            confirmation_dir: default_confirmation_dir(),
            quote_url: None,
            universe_url: None,
        }
    }
}

impl SimConfig {
    /// Loads configuration from `path`. A missing file yields the
    /// defaults; a malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }
}
