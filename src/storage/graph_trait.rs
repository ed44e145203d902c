//! Core contract for directed-graph storage representations.
//!
//! This module defines the [`Graph`] trait, the capability set every storage
//! representation satisfies. The trait is object-safe on purpose: traversal
//! algorithms take `&dyn Graph`, so a single routine runs over a graph whose
//! concrete representation is only known at runtime.

/// Core capability contract for a directed graph over dense vertex indices.
///
/// A graph has a fixed number of vertices `0..vertex_count()` and an
/// append-only multiset of directed edges. Whether parallel edges survive
/// insertion is representation-dependent: [`ListGraph`](crate::storage::ListGraph)
/// and [`ArcGraph`](crate::storage::ArcGraph) preserve duplicates,
/// [`SetGraph`](crate::storage::SetGraph) de-duplicates, and
/// [`MatrixGraph`](crate::storage::MatrixGraph) insertion is idempotent.
///
/// # Preconditions
/// Every vertex argument must lie in `[0, vertex_count())`. Violations are
/// caller bugs and assert rather than returning an error; see
/// [`GraphCheckedExt`](crate::storage::GraphCheckedExt) for fallible variants.
///
/// # Example
/// ```
/// use digraph_rep::storage::{Graph, ListGraph};
///
/// let mut g = ListGraph::with_vertices(3);
/// g.add_edge(0, 1);
/// g.add_edge(1, 2);
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.successors(0), vec![1]);
/// assert_eq!(g.predecessors(2), vec![1]);
/// ```
pub trait Graph {
    /// Number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Insert the directed edge `from → to`.
    fn add_edge(&mut self, from: usize, to: usize);

    /// Direct successors of `vertex`. Order and duplicate policy are
    /// representation-dependent.
    fn successors(&self, vertex: usize) -> Vec<usize>;

    /// Direct predecessors of `vertex`.
    ///
    /// No representation maintains a reverse index; in all but the matrix this
    /// is a full scan of the stored edges, O(V+E) per call.
    fn predecessors(&self, vertex: usize) -> Vec<usize>;
}
