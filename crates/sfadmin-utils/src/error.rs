//! Error types for the parsing helpers

use thiserror::Error;

/// Failures while turning a time value into a formatted string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Text that is neither an epoch nor a supported date layout
    #[error("unparseable time value: {0:?}")]
    Unparseable(String),

    /// Epoch outside the representable date range, or too large for an integer
    #[error("epoch value out of range: {0}")]
    OutOfRange(String),

    /// Wall-clock time that does not exist in the target time zone (DST gap)
    #[error("local time does not exist in this time zone: {0}")]
    NonexistentLocalTime(String),
}

/// Failures while parsing a URL query string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("failed to decode query string: {0}")]
    Decode(String),
}
