//! Error type for record pipeline operations.

use thiserror::Error;

/// Errors raised at the call boundary of a pipeline operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A negative element count was passed to `limit` or `skip`.
    #[error("{op}: count must be non-negative, got {n}")]
    InvalidCount { op: &'static str, n: i64 },

    /// Two records in a store share the same identifier.
    #[error("duplicate record id {0}")]
    DuplicateId(u64),
}

/// Convert a signed count argument into a `usize`, rejecting negatives.
pub(crate) fn count_arg(op: &'static str, n: i64) -> Result<usize, PipelineError> {
    usize::try_from(n).map_err(|_| {
        tracing::warn!(op, n, "rejected negative count");
        PipelineError::InvalidCount { op, n }
    })
}
