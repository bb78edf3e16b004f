//! Unit tests for the Kruskal engine and its counting behaviour.

use rstest::rstest;

use crate::{Algorithm, Edge, Graph, MstError, kruskal};

fn graph(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Graph {
    Graph::new(
        1,
        vertex_count,
        edges
            .iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight))
            .collect(),
    )
}

fn k4() -> Graph {
    graph(
        4,
        &[
            (0, 1, 1),
            (0, 2, 4),
            (0, 3, 3),
            (1, 2, 2),
            (1, 3, 5),
            (2, 3, 6),
        ],
    )
}

#[test]
fn selects_known_tree_on_k4() {
    let run = kruskal(&k4()).expect("k4 must succeed");
    let forest = run.forest();
    assert_eq!(forest.total_weight(), 6);
    assert_eq!(forest.edge_count(), 3);
    assert!(forest.is_connected());
    assert_eq!(
        forest.tree_edges(),
        vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 3, 3)]
    );
}

#[test]
fn bills_every_find_step_on_k4() {
    let run = kruskal(&k4()).expect("k4 must succeed");
    let metrics = run.metrics();
    assert_eq!(metrics.algorithm(), Algorithm::Kruskal);
    // Three accepted edges; the third one walks the 0 -> 1 -> 2 chain the
    // unbalanced unions built, and every find call bills its terminal step.
    assert_eq!(metrics.comparisons(), 14);
    assert_eq!(metrics.unions(), 3);
    assert_eq!(metrics.pq_operations(), 0);
    assert_eq!(metrics.total_operations(), 17);
    assert_eq!(metrics.total_cost(), 6);
}

#[rstest]
#[case::listed_first(
    &[(1, 2, 5), (0, 1, 5), (0, 2, 5)],
    vec![Edge::new(1, 2, 5), Edge::new(0, 1, 5)]
)]
#[case::reordered(
    &[(0, 2, 5), (1, 2, 5), (0, 1, 5)],
    vec![Edge::new(0, 2, 5), Edge::new(1, 2, 5)]
)]
fn equal_weights_select_in_input_order(
    #[case] edges: &[(usize, usize, i64)],
    #[case] expected: Vec<Edge>,
) {
    let run = kruskal(&graph(3, edges)).expect("triangle must succeed");
    assert_eq!(run.forest().tree_edges(), expected);
}

#[test]
fn disconnected_input_yields_a_forest() {
    let run = kruskal(&graph(
        6,
        &[(0, 1, 1), (1, 2, 1), (3, 4, 1), (4, 5, 1)],
    ))
    .expect("forest must succeed");
    let forest = run.forest();
    assert_eq!(forest.edge_count(), 4);
    assert!(forest.edge_count() < forest.vertex_count() - 1);
    assert_eq!(forest.component_count(), 2);
    assert!(!forest.is_connected());
    assert_eq!(forest.total_weight(), 4);
}

#[test]
fn self_loops_are_skipped_after_paying_their_finds() {
    let run = kruskal(&graph(2, &[(0, 0, 1), (0, 1, 2)])).expect("graph must succeed");
    assert_eq!(run.forest().tree_edges(), vec![Edge::new(0, 1, 2)]);
    // The self-loop costs two single-step finds before being rejected.
    assert_eq!(run.metrics().comparisons(), 6);
    assert_eq!(run.metrics().unions(), 1);
}

#[test]
fn rejects_out_of_bounds_endpoints() {
    let result = kruskal(&graph(3, &[(0, 3, 1)]));
    assert!(matches!(
        result,
        Err(MstError::InvalidEdgeEndpoint {
            vertex: 3,
            vertex_count: 3
        })
    ));
}

#[test]
fn empty_graph_yields_an_empty_forest() {
    let run = kruskal(&graph(0, &[])).expect("empty graph must succeed");
    assert_eq!(run.forest().edge_count(), 0);
    assert_eq!(run.forest().total_weight(), 0);
    assert_eq!(run.metrics().total_operations(), 0);
}

#[test]
fn single_vertex_needs_no_edges() {
    let run = kruskal(&graph(1, &[])).expect("single vertex must succeed");
    assert_eq!(run.forest().edge_count(), 0);
    assert!(run.forest().is_connected());
}
