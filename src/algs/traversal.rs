//! BFS/DFS traversal over any [`Graph`] representation.
//!
//! The single-source workers [`bfs`] and [`dfs`] share a caller-owned visited
//! marker so several launches can cover a disconnected graph without
//! re-visiting; the [`main_bfs`]/[`main_dfs`] drivers do exactly that, rooting
//! a traversal at every not-yet-visited vertex in index order.

use crate::storage::Graph;
use std::collections::VecDeque;

/// Breadth-first traversal rooted at `start`.
///
/// Invokes `visit` exactly once per newly reached vertex, in dequeue order.
/// A successor is marked in `visited` at enqueue time, not dequeue time, so a
/// vertex reachable through two predecessors cannot enter the queue twice.
///
/// `visited` must have one slot per vertex and is shared across launches when
/// driven by [`main_bfs`].
///
/// # Example
/// ```
/// use digraph_rep::prelude::*;
/// let mut g = ListGraph::with_vertices(4);
/// g.add_edges_from([(0, 1), (0, 2), (1, 3), (2, 3)]);
/// let mut order = Vec::new();
/// let mut visited = vec![false; g.vertex_count()];
/// bfs(&g, 0, &mut visited, &mut |v| order.push(v));
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// ```
pub fn bfs<F>(graph: &dyn Graph, start: usize, visited: &mut [bool], visit: &mut F)
where
    F: FnMut(usize),
{
    let n = graph.vertex_count();
    assert!(start < n, "vertex {start} out of range for graph of {n} vertices");
    assert_eq!(visited.len(), n, "visited marker length must equal vertex count");

    visited[start] = true;
    let mut queue = VecDeque::from([start]);
    while let Some(vertex) = queue.pop_front() {
        visit(vertex);
        for next in graph.successors(vertex) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
}

/// Depth-first pre-order traversal rooted at `start`.
///
/// Invokes `visit` on a vertex the moment it is first reached, then descends
/// into its unvisited successors in the order the contract returns them.
///
/// Runs on an explicit frame stack instead of native recursion, so traversal
/// depth is bounded by heap, not call stack. Each frame holds a vertex's
/// successor list and a cursor into it; pushing a frame is exactly a recursive
/// descent, so the visitation order matches the recursive formulation.
pub fn dfs<F>(graph: &dyn Graph, start: usize, visited: &mut [bool], visit: &mut F)
where
    F: FnMut(usize),
{
    let n = graph.vertex_count();
    assert!(start < n, "vertex {start} out of range for graph of {n} vertices");
    assert_eq!(visited.len(), n, "visited marker length must equal vertex count");

    visited[start] = true;
    visit(start);
    let mut stack = vec![(graph.successors(start), 0usize)];
    while let Some((successors, cursor)) = stack.last_mut() {
        if let Some(&next) = successors.get(*cursor) {
            *cursor += 1;
            if !visited[next] {
                visited[next] = true;
                visit(next);
                stack.push((graph.successors(next), 0));
            }
        } else {
            stack.pop();
        }
    }
}

/// Breadth-first traversal of the whole graph, disconnected components
/// included.
///
/// Iterates vertex indices `0..N` and launches [`bfs`] at every vertex not yet
/// reached, sharing one visited marker across launches; every vertex is
/// visited exactly once regardless of component structure.
pub fn main_bfs<F>(graph: &dyn Graph, mut visit: F)
where
    F: FnMut(usize),
{
    let mut visited = vec![false; graph.vertex_count()];
    for root in 0..graph.vertex_count() {
        if !visited[root] {
            log::trace!("main_bfs: launching at component root {root}");
            bfs(graph, root, &mut visited, &mut visit);
        }
    }
}

/// Depth-first traversal of the whole graph, disconnected components
/// included. Counterpart of [`main_bfs`].
pub fn main_dfs<F>(graph: &dyn Graph, mut visit: F)
where
    F: FnMut(usize),
{
    let mut visited = vec![false; graph.vertex_count()];
    for root in 0..graph.vertex_count() {
        if !visited[root] {
            log::trace!("main_dfs: launching at component root {root}");
            dfs(graph, root, &mut visited, &mut visit);
        }
    }
}
