//! Edge-list implementation of the [`Graph`] contract.

use super::graph_trait::Graph;
use serde::{Deserialize, Serialize};

/// A directed graph stored as one flat list of `(from, to)` pairs.
///
/// The vertex count is stored separately, since the edge list alone does not
/// bound it. Insertion appends; both successor and predecessor queries are full
/// scans of the edge list, O(E) per call. Parallel edges are preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcGraph {
    vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl ArcGraph {
    /// Creates a graph with `vertices` vertices and no edges.
    pub fn with_vertices(vertices: usize) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    /// Copies any other representation into edge-list storage, one pair per
    /// successor the source reports.
    pub fn from_graph(source: &dyn Graph) -> Self {
        let n = source.vertex_count();
        log::trace!("ArcGraph::from_graph: copying {n} vertices");
        let mut edges = Vec::new();
        for from in 0..n {
            for to in source.successors(from) {
                edges.push((from, to));
            }
        }
        Self { vertices: n, edges }
    }
}

impl Graph for ArcGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        let n = self.vertices;
        assert!(from < n, "edge source {from} out of range for graph of {n} vertices");
        assert!(to < n, "edge target {to} out of range for graph of {n} vertices");
        self.edges.push((from, to));
    }

    fn successors(&self, vertex: usize) -> Vec<usize> {
        let n = self.vertices;
        assert!(vertex < n, "vertex {vertex} out of range for graph of {n} vertices");
        self.edges
            .iter()
            .filter(|&&(from, _)| from == vertex)
            .map(|&(_, to)| to)
            .collect()
    }

    fn predecessors(&self, vertex: usize) -> Vec<usize> {
        let n = self.vertices;
        assert!(vertex < n, "vertex {vertex} out of range for graph of {n} vertices");
        self.edges
            .iter()
            .filter(|&&(_, to)| to == vertex)
            .map(|&(from, _)| from)
            .collect()
    }
}
