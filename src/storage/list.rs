//! Adjacency-list implementation of the [`Graph`] contract.
//!
//! This module provides [`ListGraph`], the reference representation: one
//! successor vector per vertex. Insertion appends, successor queries clone a
//! single vector, predecessor queries scan every vector.

use super::graph_trait::Graph;
use serde::{Deserialize, Serialize};

/// A directed graph stored as one successor list per vertex.
///
/// Parallel edges and self-loops are preserved exactly as inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGraph {
    lists: Vec<Vec<usize>>,
}

impl ListGraph {
    /// Creates a graph with `vertices` vertices and no edges.
    ///
    /// # Example
    /// ```
    /// use digraph_rep::storage::{Graph, ListGraph};
    /// let g = ListGraph::with_vertices(5);
    /// assert_eq!(g.vertex_count(), 5);
    /// assert!(g.successors(4).is_empty());
    /// ```
    pub fn with_vertices(vertices: usize) -> Self {
        Self {
            lists: vec![Vec::new(); vertices],
        }
    }

    /// Copies any other representation into adjacency-list storage.
    ///
    /// Reads only the source's contract surface; the source is left
    /// unmodified.
    ///
    /// # Example
    /// ```
    /// use digraph_rep::storage::{ArcGraph, Graph, ListGraph};
    /// let mut arcs = ArcGraph::with_vertices(3);
    /// arcs.add_edge(0, 2);
    /// arcs.add_edge(2, 1);
    /// let g = ListGraph::from_graph(&arcs);
    /// assert_eq!(g.vertex_count(), 3);
    /// assert_eq!(g.successors(2), vec![1]);
    /// ```
    pub fn from_graph(source: &dyn Graph) -> Self {
        let n = source.vertex_count();
        log::trace!("ListGraph::from_graph: copying {n} vertices");
        let mut lists = Vec::with_capacity(n);
        for vertex in 0..n {
            lists.push(source.successors(vertex));
        }
        Self { lists }
    }
}

impl Graph for ListGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        let n = self.lists.len();
        assert!(from < n, "edge source {from} out of range for graph of {n} vertices");
        assert!(to < n, "edge target {to} out of range for graph of {n} vertices");
        self.lists[from].push(to);
    }

    fn successors(&self, vertex: usize) -> Vec<usize> {
        let n = self.lists.len();
        assert!(vertex < n, "vertex {vertex} out of range for graph of {n} vertices");
        self.lists[vertex].clone()
    }

    fn predecessors(&self, vertex: usize) -> Vec<usize> {
        let n = self.lists.len();
        assert!(vertex < n, "vertex {vertex} out of range for graph of {n} vertices");
        let mut prev = Vec::new();
        for (from, outs) in self.lists.iter().enumerate() {
            for &to in outs {
                if to == vertex {
                    prev.push(from);
                }
            }
        }
        prev
    }
}
