//! Engine error types.
//!
//! Contract violations fail fast at construction time; silently clamping
//! an out-of-range rate would corrupt the ground-truth contract. Negative
//! record counts are unrepresentable (`usize`).

use thiserror::Error;

/// Errors from pipeline construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// `error_rate` outside `[0, 1]`.
    #[error("error rate {0} outside [0, 1]")]
    InvalidErrorRate(f64),

    /// A symbol universe with no symbols; nothing can be sampled.
    #[error("symbol universe is empty")]
    EmptyUniverse,
}
