//! Checked-surface behavior and serialization round-trips.

use digraph_rep::prelude::*;
use std::collections::BTreeSet;

fn populated<G: Graph>(mut g: G) -> G {
    g.add_edges_from([(0, 1), (1, 2), (2, 0), (0, 2)]);
    g
}

fn successor_set(graph: &dyn Graph, vertex: usize) -> BTreeSet<usize> {
    graph.successors(vertex).into_iter().collect()
}

#[test]
fn try_add_edge_never_panics_and_never_mutates_on_error() {
    let mut g = populated(ListGraph::with_vertices(3));
    let before = g.clone();
    assert_eq!(
        g.try_add_edge(0, 9),
        Err(GraphError::VertexOutOfBounds { vertex: 9, count: 3 })
    );
    assert_eq!(g, before);
    assert_eq!(
        g.try_add_edge(9, 0).unwrap_err().to_string(),
        "vertex 9 out of range for graph of 3 vertices"
    );
}

#[test]
fn checked_surface_works_through_dyn_graph() {
    let mut boxed: Box<dyn Graph> = Box::new(SetGraph::with_vertices(2));
    assert!(boxed.try_add_edge(0, 1).is_ok());
    assert!(boxed.try_add_edge(0, 2).is_err());
    assert_eq!(boxed.try_successors(0).unwrap(), vec![1]);
    assert!(boxed.try_predecessors(5).is_err());
}

#[test]
fn serde_round_trip_preserves_every_representation() {
    let list = populated(ListGraph::with_vertices(3));
    let json = serde_json::to_string(&list).unwrap();
    let back: ListGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);

    let matrix = MatrixGraph::from_graph(&list);
    let json = serde_json::to_string(&matrix).unwrap();
    let back: MatrixGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(back, matrix);

    let arcs = ArcGraph::from_graph(&list);
    let json = serde_json::to_string(&arcs).unwrap();
    let back: ArcGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(back, arcs);

    let sets = SetGraph::from_graph(&list);
    let json = serde_json::to_string(&sets).unwrap();
    let back: SetGraph = serde_json::from_str(&json).unwrap();
    for v in 0..sets.vertex_count() {
        assert_eq!(successor_set(&back, v), successor_set(&sets, v));
    }
}

#[test]
fn query_ext_agrees_with_materialized_lists() {
    let g = populated(ArcGraph::with_vertices(3));
    for v in 0..g.vertex_count() {
        assert_eq!(g.out_degree(v), g.successors(v).len());
        assert_eq!(g.in_degree(v), g.predecessors(v).len());
    }
    assert!(g.has_edge(2, 0));
    assert!(!g.has_edge(1, 0));
    assert_eq!(g.edges(), vec![(0, 1), (0, 2), (1, 2), (2, 0)]);
}
