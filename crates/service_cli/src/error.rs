//! CLI error types.

use thiserror::Error;

/// Top-level CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Pipeline contract violation.
    #[error(transparent)]
    Engine(#[from] recon_engine::EngineError),

    /// Dataset persistence failure.
    #[error(transparent)]
    Store(#[from] infra_store::StoreError),

    /// Confirmation output failure.
    #[error(transparent)]
    Confirm(#[from] service_confirm::ConfirmError),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
