//! Error types for the string construction surface.

use thiserror::Error;

/// Errors from parsing a length out of a `"<number><unit>"` string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseLengthError {
    /// The string carries no recognized unit suffix.
    #[error("unknown or missing unit suffix in {input:?}")]
    UnknownUnit { input: String },

    /// The part before the unit suffix is not a number.
    #[error("invalid number in {input:?}")]
    InvalidNumber { input: String },

    /// The quantity parsed to NaN or an infinity.
    #[error("non-finite quantity in {input:?}")]
    NonFinite { input: String },
}
