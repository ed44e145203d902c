//! DFS-based topological ordering over any [`Graph`] representation.

use crate::storage::Graph;
use std::collections::VecDeque;

/// Topologically sorts the graph: for acyclic input, every vertex precedes
/// all vertices reachable from it in the returned sequence.
///
/// Runs a depth-first pass from every not-yet-visited vertex in index order,
/// sharing one visited marker across the whole sort; a vertex is prepended to
/// the front of the output once all of its successors have been exhausted.
/// Like [`dfs`](crate::algs::traversal::dfs), the recursion is emulated with
/// explicit frames so depth is bounded by heap.
///
/// On cyclic input the result is some unspecified ordering; this sort does
/// not detect cycles. Callers needing cycle detection must check separately.
///
/// # Example
/// ```
/// use digraph_rep::prelude::*;
/// let mut g = ListGraph::with_vertices(4);
/// g.add_edges_from([(3, 1), (1, 0), (0, 2)]);
/// let sorted: Vec<_> = topological_sort(&g).into();
/// assert_eq!(sorted, vec![3, 1, 0, 2]);
/// ```
pub fn topological_sort(graph: &dyn Graph) -> VecDeque<usize> {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut sorted = VecDeque::with_capacity(n);

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut stack = vec![(root, graph.successors(root), 0usize)];
        while let Some((vertex, successors, cursor)) = stack.last_mut() {
            if let Some(&next) = successors.get(*cursor) {
                *cursor += 1;
                if !visited[next] {
                    visited[next] = true;
                    stack.push((next, graph.successors(next), 0));
                }
            } else {
                let finished = *vertex;
                stack.pop();
                sorted.push_front(finished);
            }
        }
    }
    sorted
}
