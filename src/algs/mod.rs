//! Traversal algorithms over the abstract [`Graph`](crate::storage::Graph)
//! contract.
//!
//! Everything here consumes `&dyn Graph`; no algorithm names a concrete
//! representation.

pub mod toposort;
pub mod traversal;

pub use toposort::topological_sort;
pub use traversal::{bfs, dfs, main_bfs, main_dfs};
