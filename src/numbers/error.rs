//! Error types for the checked arithmetic pipeline.

use thiserror::Error;

/// Errors raised while turning text into a reciprocal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NumberError {
    /// The input is not a valid integer representation.
    #[error("{0} is not a valid integer.")]
    Parse(String),

    /// The reciprocal of zero is undefined.
    #[error("Cannot take reciprocal of 0.")]
    Reciprocal,
}
