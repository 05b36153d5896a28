//! Error types for the tinct core.

use thiserror::Error;

/// Errors produced when parsing a hex color string.
///
/// These are the only failures the library surfaces. Numeric inputs are never
/// rejected anywhere else; out-of-range channel values are clamped instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The hex string had a digit count other than 3, 4, 6, or 8.
    #[error("invalid hex color length: expected 3, 4, 6, or 8 digits, got {0}")]
    InvalidHexLength(usize),

    /// The hex string contained a character that is not a hex digit.
    #[error("invalid hex color: non-hex digit in {0:?}")]
    InvalidHexDigit(String),
}
