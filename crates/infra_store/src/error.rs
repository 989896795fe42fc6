//! Persistence error types.

use thiserror::Error;

/// Storage read/write failure. Not recoverable locally; propagates to the
/// pipeline caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
