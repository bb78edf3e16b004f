//! Shared graph builders and structural checks for the engine suites.

use mstbench_core::{Edge, Graph};

/// Builds a graph from `(source, target, weight)` triples in the given
/// order.
pub fn graph(id: u32, vertex_count: usize, edges: &[(usize, usize, i64)]) -> Graph {
    Graph::new(
        id,
        vertex_count,
        edges
            .iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight))
            .collect(),
    )
}

/// Asserts `edges` form a forest over `vertex_count` vertices (no cycles,
/// endpoints in bounds) using an independent union-find, and returns the
/// number of components the forest leaves behind.
pub fn assert_acyclic_forest(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();

    fn find(parent: &mut [usize], vertex: usize) -> usize {
        let mut current = vertex;
        while parent[current] != current {
            parent[current] = parent[parent[current]];
            current = parent[current];
        }
        current
    }

    for edge in edges {
        assert!(edge.source() < vertex_count);
        assert!(edge.target() < vertex_count);
        let source_root = find(&mut parent, edge.source());
        let target_root = find(&mut parent, edge.target());
        assert_ne!(
            source_root,
            target_root,
            "edge ({}, {}) closes a cycle",
            edge.source(),
            edge.target()
        );
        parent[target_root] = source_root;
    }

    let mut roots: Vec<usize> = (0..vertex_count)
        .map(|vertex| find(&mut parent, vertex))
        .collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}
