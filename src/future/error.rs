//! # Async Errors
//!
//! Failures that cross a suspension point.

use thiserror::Error;

/// The producer side went away without completing.
///
/// Raised when a [`Promise`](super::Promise) or a
/// [`Continuation`](super::Continuation) is dropped unresolved. Error types
/// used with the adapter implement `From<Abandoned>` so waiters receive a
/// failure instead of waiting forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Operation dropped before completing")]
pub struct Abandoned;

/// Errors produced by asynchronous lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsyncFailure {
    /// The lookup ran but could not produce a value.
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// The requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The producer never completed.
    #[error(transparent)]
    Abandoned(#[from] Abandoned),
}
