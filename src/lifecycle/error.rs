//! Error type for running demonstrations.

use crate::future::AsyncFailure;
use thiserror::Error;

/// Anything that can stop a demonstration from finishing.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing the report failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// An awaited operation failed.
    #[error("Async operation failed: {0}")]
    Async(#[from] AsyncFailure),
}
