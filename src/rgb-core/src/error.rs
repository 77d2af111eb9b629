//! Error types for color parsing.

use thiserror::Error;

/// Error type for hexadecimal color parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex string (without the optional `#`) had an unsupported length.
    #[error("invalid hex length: {0} (expected 1, 3, 4, 6, or 8)")]
    InvalidLength(usize),

    /// A character that is not a hexadecimal digit.
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}

/// Result type alias using [`ColorParseError`].
pub type Result<T> = std::result::Result<T, ColorParseError>;
