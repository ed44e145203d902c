//! # digraph-rep
//!
//! digraph-rep is a small library for directed graphs over dense integer
//! vertex indices `0..N-1`. It provides four interchangeable storage
//! representations (adjacency list, dense adjacency matrix, edge list, and
//! per-vertex hash sets) behind one object-safe [`storage::Graph`] contract,
//! plus breadth-first, depth-first, and topological-sort traversals written
//! once against that contract.
//!
//! ## Design
//! - The vertex count is fixed at construction; edges are append-only. No
//!   vertex or edge removal is supported.
//! - Every representation can be built from any other through
//!   `from_graph(&dyn Graph)`: the conversion reads only the source's contract
//!   surface and writes through the target's native insertion path.
//! - Traversals take `&dyn Graph`, so one routine runs over a graph of unknown
//!   concrete representation supplied at runtime.
//! - Out-of-range vertex indices on the primary surface are caller bugs and
//!   assert; the [`storage::GraphCheckedExt`] helpers return
//!   [`error::GraphError`] instead for callers that prefer `Result` plumbing.
//!
//! ## Usage
//! ```
//! use digraph_rep::prelude::*;
//!
//! let mut g = ListGraph::with_vertices(4);
//! g.add_edge(0, 1);
//! g.add_edge(1, 2);
//! g.add_edge(0, 3);
//!
//! let mut order = Vec::new();
//! main_bfs(&g, |v| order.push(v));
//! assert_eq!(order, vec![0, 1, 3, 2]);
//!
//! let dense = MatrixGraph::from_graph(&g);
//! assert_eq!(dense.successors(0), vec![1, 3]);
//! ```

pub mod algs;
pub mod error;
pub mod storage;

/// A convenient prelude importing the most-used traits, types, and functions.
pub mod prelude {
    pub use crate::algs::toposort::topological_sort;
    pub use crate::algs::traversal::{bfs, dfs, main_bfs, main_dfs};
    pub use crate::error::GraphError;
    pub use crate::storage::{
        ArcGraph, Graph, GraphBuildExt, GraphCheckedExt, GraphQueryExt, ListGraph, MatrixGraph,
        SetGraph,
    };
}
