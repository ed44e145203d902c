//! Hash-set implementation of the [`Graph`] contract.

use super::graph_trait::Graph;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

/// A directed graph stored as one hash set of successors per vertex.
///
/// Insertion de-duplicates by construction: a successor list never contains
/// the same target twice. Successor order follows set iteration and is
/// unspecified; callers must not depend on it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SetGraph {
    sets: Vec<HashSet<usize>>,
}

impl SetGraph {
    /// Creates a graph with `vertices` vertices and no edges.
    pub fn with_vertices(vertices: usize) -> Self {
        Self {
            sets: vec![HashSet::new(); vertices],
        }
    }

    /// Copies any other representation into hash-set storage; duplicate edges
    /// in the source collapse.
    pub fn from_graph(source: &dyn Graph) -> Self {
        let n = source.vertex_count();
        log::trace!("SetGraph::from_graph: copying {n} vertices");
        let mut out = Self::with_vertices(n);
        for from in 0..n {
            out.sets[from].extend(source.successors(from));
        }
        out
    }
}

impl Graph for SetGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.sets.len()
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        let n = self.sets.len();
        assert!(from < n, "edge source {from} out of range for graph of {n} vertices");
        assert!(to < n, "edge target {to} out of range for graph of {n} vertices");
        self.sets[from].insert(to);
    }

    fn successors(&self, vertex: usize) -> Vec<usize> {
        let n = self.sets.len();
        assert!(vertex < n, "vertex {vertex} out of range for graph of {n} vertices");
        self.sets[vertex].iter().copied().collect()
    }

    fn predecessors(&self, vertex: usize) -> Vec<usize> {
        let n = self.sets.len();
        assert!(vertex < n, "vertex {vertex} out of range for graph of {n} vertices");
        self.sets
            .iter()
            .enumerate()
            .filter(|(_, outs)| outs.contains(&vertex))
            .map(|(from, _)| from)
            .collect()
    }
}
