//! Dense adjacency-matrix implementation of the [`Graph`] contract.
//!
//! [`MatrixGraph`] stores edge presence as a flat row-major boolean matrix.
//! Both directions are O(N) lookups by index arithmetic, no edge scan needed.

use super::graph_trait::Graph;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A directed graph stored as a flat `n * n` boolean presence matrix.
///
/// One cell per `(from, to)` pair makes insertion idempotent: re-inserting an
/// edge overwrites the cell and cannot accumulate a multi-edge, unlike
/// [`ListGraph`](crate::storage::ListGraph) and
/// [`ArcGraph`](crate::storage::ArcGraph), which preserve duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixGraph {
    n: usize,
    cells: Vec<bool>,
}

impl MatrixGraph {
    /// Creates a graph with `vertices` vertices and every cell clear.
    pub fn with_vertices(vertices: usize) -> Self {
        Self {
            n: vertices,
            cells: vec![false; vertices * vertices],
        }
    }

    /// Copies any other representation into matrix storage.
    ///
    /// Duplicate edges in the source collapse into a single set cell.
    pub fn from_graph(source: &dyn Graph) -> Self {
        let n = source.vertex_count();
        log::trace!("MatrixGraph::from_graph: copying {n} vertices");
        let mut out = Self::with_vertices(n);
        for from in 0..n {
            for to in source.successors(from) {
                let idx = out.index(from, to);
                out.cells[idx] = true;
            }
        }
        out
    }

    /// The raw length-`n` presence row of `vertex`: cell `[to]` is `true` iff
    /// the edge `vertex → to` exists.
    ///
    /// [`successors`](Graph::successors) reports the same information as the
    /// ascending indices of set cells; this accessor exposes the positional
    /// form for callers that want the dense row itself.
    pub fn row(&self, vertex: usize) -> &[bool] {
        let n = self.n;
        assert!(vertex < n, "vertex {vertex} out of range for graph of {n} vertices");
        &self.cells[vertex * n..(vertex + 1) * n]
    }

    #[inline]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.n + to
    }
}

impl Graph for MatrixGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        let n = self.n;
        assert!(from < n, "edge source {from} out of range for graph of {n} vertices");
        assert!(to < n, "edge target {to} out of range for graph of {n} vertices");
        let i = self.index(from, to);
        self.cells[i] = true;
    }

    fn successors(&self, vertex: usize) -> Vec<usize> {
        self.row(vertex).iter().positions(|&cell| cell).collect()
    }

    fn predecessors(&self, vertex: usize) -> Vec<usize> {
        let n = self.n;
        assert!(vertex < n, "vertex {vertex} out of range for graph of {n} vertices");
        (0..n)
            .filter(|&from| self.cells[from * n + vertex])
            .collect()
    }
}
