//! Walkthrough of the four storage representations over one fixed graph.
//!
//! Builds a 7-vertex graph as an adjacency list, runs BFS, DFS, and the
//! topological sort, then converts it List -> Matrix -> Arc -> Set (each
//! conversion reading only the abstract contract) and re-runs the traversals
//! at every stage to show the algorithms never notice the storage change.

use digraph_rep::prelude::*;
use itertools::Itertools;

const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 5),
    (1, 2),
    (1, 3),
    (1, 5),
    (1, 6),
    (3, 2),
    (3, 4),
    (3, 6),
    (5, 4),
    (5, 6),
    (6, 4),
];

fn print_traversals(graph: &dyn Graph) {
    let mut order = Vec::new();
    main_bfs(graph, |v| order.push(v));
    println!("  bfs: {}", order.iter().join(" "));
    order.clear();
    main_dfs(graph, |v| order.push(v));
    println!("  dfs: {}", order.iter().join(" "));
}

fn main() {
    let mut list = ListGraph::with_vertices(7);
    list.add_edges_from(EDGES);

    println!("adjacency list:");
    print_traversals(&list);
    println!(
        "  topological order: {}",
        topological_sort(&list).iter().join(" ")
    );

    let matrix = MatrixGraph::from_graph(&list);
    println!("adjacency matrix (converted from list):");
    print_traversals(&matrix);

    let arcs = ArcGraph::from_graph(&matrix);
    println!("edge list (converted from matrix):");
    print_traversals(&arcs);

    let sets = SetGraph::from_graph(&arcs);
    println!("hash sets (converted from edge list):");
    print_traversals(&sets);
}
