//! # Error Types
//!
//! Error types for the stitching pipeline.
//!
//! ## Error Policy
//!
//! - All failures are local to one shape; a malformed shape never aborts
//!   processing of its siblings in a batch
//! - Errors carry enough context to be logged upstream and skipped
//! - No retries; every operation is a pure function of its inputs

use thiserror::Error;

/// Errors that can occur while stitching contours into mesh buffers.
#[derive(Debug, Error)]
pub enum StitchError {
    /// A cluster failed its bridging preconditions (e.g. a root contour
    /// with fewer vertices than a bridge requires). The cluster is skipped.
    #[error("Degenerate cluster: {message}")]
    DegenerateCluster {
        /// Description of the failed precondition.
        message: String,
    },

    /// A face loop referenced a point outside its own point list.
    #[error("Face index {index} out of bounds (loop has {len} points)")]
    InvalidIndex {
        /// The offending loop-local index.
        index: u32,
        /// Number of points supplied with the loop.
        len: usize,
    },

    /// Rejected configuration values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StitchError {
    /// Creates a degenerate-cluster error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateCluster {
            message: message.into(),
        }
    }
}

/// Result type alias for stitching operations.
pub type Result<T> = std::result::Result<T, StitchError>;

// =============================================================================
// TESTS
// =============================================================================
