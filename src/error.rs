//! Crate error types.

use thiserror::Error;

/// Errors reported at the public boundary; the transform itself is total
/// over validated inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input contains the reserved sentinel byte 0.
    #[error("reserved byte 0 at position {0}")]
    ReservedByte(usize),

    /// The input is empty.
    #[error("input text is empty")]
    Empty,

    /// The input does not fit the 32-bit workspace.
    #[error("input of {0} bytes exceeds the supported maximum")]
    TooLong(usize),

    /// A transform handed to the inverse is not one this crate produced.
    #[error("malformed transform: {0}")]
    Malformed(&'static str),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
