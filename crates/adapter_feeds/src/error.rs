//! Upstream failure classification.
//!
//! These errors never cross the crate boundary as `Err`: every failure is
//! converted into a fallback value, and the error's display string becomes
//! the fallback `reason`.

use thiserror::Error;

/// Classified upstream lookup failure.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP-layer failure (connect, status, body read).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Payload did not parse as expected.
    #[error("payload parse failed: {0}")]
    Parse(String),

    /// A required field was absent from an otherwise well-formed payload.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The upstream answered with an empty result set.
    #[error("empty result set")]
    EmptyPayload,
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err.to_string())
    }
}

impl From<csv::Error> for FeedError {
    fn from(err: csv::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}
