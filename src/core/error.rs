//! Error types for the presentation core

/// Errors raised while turning a record into display fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuakeError {
    /// The record carries a value that cannot be formatted (NaN or infinite magnitude).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// A time-zone setting could not be parsed.
    #[error("invalid time zone '{0}': expected 'utc', 'local' or an offset like +05:30")]
    InvalidTimeZone(String),
}

impl QuakeError {
    pub fn non_finite_magnitude(magnitude: f64) -> Self {
        QuakeError::InvalidRecord(format!("magnitude must be finite, got {}", magnitude))
    }
}
