//! Confirmation output error types.

use thiserror::Error;

/// Failure while writing confirmation documents. Propagates to the
/// pipeline caller; rendering itself is pure and cannot fail.
#[derive(Debug, Error)]
pub enum ConfirmError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
