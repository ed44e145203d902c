//! Bulk edge insertion helpers for [`Graph`] implementations.

use super::graph_trait::Graph;

/// Insert many edges in one call, through the representation's native
/// insertion path.
pub trait GraphBuildExt: Graph {
    /// Insert every `(from, to)` pair in order. Duplicate pairs follow the
    /// representation's own policy (preserved, collapsed, or idempotent).
    ///
    /// # Example
    /// ```
    /// use digraph_rep::storage::{Graph, GraphBuildExt, ListGraph};
    /// let mut g = ListGraph::with_vertices(3);
    /// g.add_edges_from([(0, 1), (1, 2), (2, 0)]);
    /// assert_eq!(g.successors(2), vec![0]);
    /// ```
    fn add_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }
}

impl<G: Graph + ?Sized> GraphBuildExt for G {}
