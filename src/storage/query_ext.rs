//! Extension methods for common edge queries.

use super::graph_trait::Graph;

/// Degree counts and edge queries built on top of the core [`Graph`] contract
/// without modifying it.
///
/// Blanket-implemented for every representation, `dyn Graph` included.
pub trait GraphQueryExt: Graph {
    /// Out-degree of `vertex` (parallel edges counted per insertion where the
    /// representation preserves them).
    fn out_degree(&self, vertex: usize) -> usize {
        self.successors(vertex).len()
    }

    /// In-degree of `vertex`.
    fn in_degree(&self, vertex: usize) -> usize {
        self.predecessors(vertex).len()
    }

    /// Whether the edge `from → to` exists.
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.successors(from).contains(&to)
    }

    /// All edges as `(from, to)` pairs, per-vertex successor order.
    fn edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for from in 0..self.vertex_count() {
            for to in self.successors(from) {
                out.push((from, to));
            }
        }
        out
    }
}

impl<G: Graph + ?Sized> GraphQueryExt for G {}
