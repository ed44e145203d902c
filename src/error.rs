//! GraphError: error type for the fallible query surface.
//!
//! The primary [`Graph`](crate::storage::Graph) contract treats an
//! out-of-range vertex index as a caller bug and asserts. The `try_*` helpers
//! in [`GraphCheckedExt`](crate::storage::GraphCheckedExt) report the same
//! condition as a value instead, for callers that prefer `Result` plumbing.

use thiserror::Error;

/// Error type for checked graph operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index was outside `[0, vertex_count())`.
    #[error("vertex {vertex} out of range for graph of {count} vertices")]
    VertexOutOfBounds { vertex: usize, count: usize },
}
