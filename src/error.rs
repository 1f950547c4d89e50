//! Error types for recency-container construction.

use thiserror::Error;

/// Errors that can occur when configuring a recency container.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecencyError {
    /// The requested capacity bound was zero.
    ///
    /// A recency list must be able to retain at least one entry. A zero
    /// bound is a caller bug, so construction refuses it rather than
    /// silently clamping to 1.
    #[error("capacity must be at least 1")]
    ZeroCapacity,
}
