//! Fallible variants of the [`Graph`] contract operations.
//!
//! The contract itself asserts on out-of-range vertex indices: a violation is
//! a caller bug, not a runtime condition. These `try_*` helpers serve callers
//! that would rather thread a [`GraphError`] through `?` than uphold the
//! precondition at every call site.

use super::graph_trait::Graph;
use crate::error::GraphError;

/// Checked counterparts to the panicking contract operations.
///
/// On valid input each helper agrees exactly with its primary; on an
/// out-of-range index it returns [`GraphError::VertexOutOfBounds`] and never
/// panics.
pub trait GraphCheckedExt: Graph {
    /// Validate a vertex index against this graph.
    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        let count = self.vertex_count();
        if vertex < count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds { vertex, count })
        }
    }

    /// Checked [`add_edge`](Graph::add_edge).
    fn try_add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.add_edge(from, to);
        Ok(())
    }

    /// Checked [`successors`](Graph::successors).
    fn try_successors(&self, vertex: usize) -> Result<Vec<usize>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.successors(vertex))
    }

    /// Checked [`predecessors`](Graph::predecessors).
    fn try_predecessors(&self, vertex: usize) -> Result<Vec<usize>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.predecessors(vertex))
    }
}

impl<G: Graph + ?Sized> GraphCheckedExt for G {}
