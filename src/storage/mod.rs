//! Storage representations for directed graphs.
//!
//! All representations implement the object-safe [`Graph`] contract and can be
//! constructed from any other representation via their `from_graph`
//! constructors. Extension traits layer bulk insertion ([`GraphBuildExt`]),
//! common queries ([`GraphQueryExt`]), and fallible variants
//! ([`GraphCheckedExt`]) on top of the contract without widening it.

pub mod arc;
pub mod build_ext;
pub mod checked;
pub mod graph_trait;
pub mod list;
pub mod matrix;
pub mod query_ext;
pub mod set;

pub use arc::ArcGraph;
pub use build_ext::GraphBuildExt;
pub use checked::GraphCheckedExt;
pub use graph_trait::Graph;
pub use list::ListGraph;
pub use matrix::MatrixGraph;
pub use query_ext::GraphQueryExt;
pub use set::SetGraph;
