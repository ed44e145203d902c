//! Conversion-protocol guarantees: every representation is constructible from
//! every other through the contract alone, losslessly up to each
//! representation's duplicate policy.

use digraph_rep::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeSet;

type Conv = fn(&dyn Graph) -> Box<dyn Graph>;

fn converters() -> Vec<(&'static str, Conv)> {
    vec![
        ("list", |g| Box::new(ListGraph::from_graph(g))),
        ("matrix", |g| Box::new(MatrixGraph::from_graph(g))),
        ("arc", |g| Box::new(ArcGraph::from_graph(g))),
        ("set", |g| Box::new(SetGraph::from_graph(g))),
    ]
}

fn successor_set(graph: &dyn Graph, vertex: usize) -> BTreeSet<usize> {
    graph.successors(vertex).into_iter().collect()
}

fn predecessor_set(graph: &dyn Graph, vertex: usize) -> BTreeSet<usize> {
    graph.predecessors(vertex).into_iter().collect()
}

fn assert_same_structure(a: &dyn Graph, b: &dyn Graph, context: &str) {
    assert_eq!(a.vertex_count(), b.vertex_count(), "{context}: vertex count");
    for v in 0..a.vertex_count() {
        assert_eq!(
            successor_set(a, v),
            successor_set(b, v),
            "{context}: successor set of {v}"
        );
        assert_eq!(
            predecessor_set(a, v),
            predecessor_set(b, v),
            "{context}: predecessor set of {v}"
        );
    }
}

fn fixture() -> ListGraph {
    let mut g = ListGraph::with_vertices(7);
    g.add_edges_from([
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
    ]);
    g
}

#[test]
fn round_trips_preserve_structure_for_every_pair() {
    let original = fixture();
    for (name_a, conv_a) in converters() {
        let a = conv_a(&original);
        for (name_b, conv_b) in converters() {
            let b = conv_b(a.as_ref());
            let back = conv_a(b.as_ref());
            assert_same_structure(
                a.as_ref(),
                back.as_ref(),
                &format!("{name_a} -> {name_b} -> {name_a}"),
            );
        }
    }
}

#[test]
fn conversion_chain_preserves_structure_at_every_stage() {
    let list = fixture();
    let matrix = MatrixGraph::from_graph(&list);
    assert_same_structure(&list, &matrix, "list -> matrix");
    let arcs = ArcGraph::from_graph(&matrix);
    assert_same_structure(&matrix, &arcs, "matrix -> arc");
    let sets = SetGraph::from_graph(&arcs);
    assert_same_structure(&arcs, &sets, "arc -> set");
    assert_same_structure(&list, &sets, "list -> ... -> set");
}

#[test]
fn conversion_leaves_the_source_untouched() {
    let original = fixture();
    let snapshot = original.clone();
    let _ = MatrixGraph::from_graph(&original);
    let _ = ArcGraph::from_graph(&original);
    let _ = SetGraph::from_graph(&original);
    let _ = ListGraph::from_graph(&original);
    assert_eq!(original, snapshot);
}

#[test]
fn duplicate_edges_survive_where_the_representation_allows() {
    let mut list = ListGraph::with_vertices(2);
    list.add_edge(0, 1);
    list.add_edge(0, 1);

    // List -> Arc keeps the multi-edge; Matrix and Set collapse it.
    let arcs = ArcGraph::from_graph(&list);
    assert_eq!(arcs.successors(0), vec![1, 1]);
    let matrix = MatrixGraph::from_graph(&list);
    assert_eq!(matrix.successors(0), vec![1]);
    let sets = SetGraph::from_graph(&list);
    assert_eq!(sets.successors(0), vec![1]);
}

fn arbitrary_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..48),
        )
    })
}

proptest! {
    #[test]
    fn prop_conversions_preserve_structure((n, edges) in arbitrary_graph()) {
        let mut list = ListGraph::with_vertices(n);
        list.add_edges_from(edges);
        for (name, conv) in converters() {
            let converted = conv(&list);
            assert_same_structure(&list, converted.as_ref(), name);
        }
    }

    #[test]
    fn prop_predecessors_invert_successors((n, edges) in arbitrary_graph()) {
        let mut list = ListGraph::with_vertices(n);
        list.add_edges_from(edges);
        for (name, conv) in converters() {
            let g = conv(&list);
            for v in 0..n {
                for w in predecessor_set(g.as_ref(), v) {
                    prop_assert!(
                        successor_set(g.as_ref(), w).contains(&v),
                        "{name}: {w} precedes {v} but {v} not among successors of {w}"
                    );
                }
                for w in successor_set(g.as_ref(), v) {
                    prop_assert!(
                        predecessor_set(g.as_ref(), w).contains(&v),
                        "{name}: {v} -> {w} but {v} not among predecessors of {w}"
                    );
                }
            }
        }
    }

    #[test]
    fn prop_drivers_visit_every_vertex_exactly_once((n, edges) in arbitrary_graph()) {
        let mut list = ListGraph::with_vertices(n);
        list.add_edges_from(edges);
        for (name, conv) in converters() {
            let g = conv(&list);
            let mut bfs_counts = vec![0usize; n];
            main_bfs(g.as_ref(), |v| bfs_counts[v] += 1);
            let mut dfs_counts = vec![0usize; n];
            main_dfs(g.as_ref(), |v| dfs_counts[v] += 1);
            prop_assert_eq!(&bfs_counts, &vec![1usize; n], "{}: bfs coverage", name);
            prop_assert_eq!(&dfs_counts, &vec![1usize; n], "{}: dfs coverage", name);
        }
    }

    #[test]
    fn prop_toposort_respects_edges_on_acyclic_input(
        (n, raw) in (2usize..12).prop_flat_map(|n| {
            (Just(n), proptest::collection::vec((0..n, 0..n), 0..32))
        })
    ) {
        // Orienting every pair low -> high guarantees acyclicity.
        let mut list = ListGraph::with_vertices(n);
        for (a, b) in raw {
            if a != b {
                list.add_edge(a.min(b), a.max(b));
            }
        }
        for (name, conv) in converters() {
            let g = conv(&list);
            let sorted: Vec<usize> = topological_sort(g.as_ref()).into();
            prop_assert_eq!(sorted.len(), n);
            for v in 0..n {
                for w in successor_set(g.as_ref(), v) {
                    let pos_v = sorted.iter().position(|&x| x == v).unwrap();
                    let pos_w = sorted.iter().position(|&x| x == w).unwrap();
                    prop_assert!(pos_v < pos_w, "{}: edge ({}, {}) out of order", name, v, w);
                }
            }
        }
    }
}
