//! Result types shared by both MST engines.
//!
//! Kruskal naturally produces an ordered edge list and Prim a parent-pointer
//! array. Both encodings describe the same underlying forest, so a single
//! tagged result type carries whichever encoding the engine built and adapts
//! to the other view on demand.

use crate::graph::Edge;
use crate::metrics::MetricsRecord;

/// Parent link for one vertex in the rooted view of a spanning forest.
///
/// Carries the weight of the attaching edge so the rooted view is
/// self-contained — no lookup into the original graph is needed to recover
/// tree edges from it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParentLink {
    parent: usize,
    weight: i64,
}

impl ParentLink {
    /// Creates a link attaching a vertex under `parent` via an edge of the
    /// given weight.
    #[must_use]
    pub const fn new(parent: usize, weight: i64) -> Self {
        Self { parent, weight }
    }

    /// Returns the parent vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> usize { self.parent }

    /// Returns the weight of the attaching edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum ForestEncoding {
    /// Tree edges in selection order (Kruskal).
    Edges(Vec<Edge>),
    /// Per-vertex parent links; `None` marks a root or an unreached vertex
    /// (Prim).
    Parents(Vec<Option<ParentLink>>),
}

/// The output of a minimum spanning tree/forest computation.
///
/// When the input graph is connected (and, for Prim, fully reachable from
/// vertex 0) the forest is a single spanning tree with `vertex_count - 1`
/// edges. Fewer edges mean the input was disconnected — a valid outcome the
/// accessors make observable, not an error.
///
/// # Examples
/// ```
/// use mstbench_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::new(1, 3, vec![Edge::new(0, 1, 2), Edge::new(1, 2, 5)]);
/// let run = kruskal(&graph).expect("valid graph");
/// let forest = run.forest();
/// assert_eq!(forest.total_weight(), 7);
/// assert!(forest.is_connected());
/// assert_eq!(forest.tree_edges().len(), forest.parent_links().iter().flatten().count());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    vertex_count: usize,
    total_weight: i64,
    encoding: ForestEncoding,
}

impl SpanningForest {
    pub(crate) const fn from_edges(
        vertex_count: usize,
        total_weight: i64,
        edges: Vec<Edge>,
    ) -> Self {
        Self {
            vertex_count,
            total_weight,
            encoding: ForestEncoding::Edges(edges),
        }
    }

    pub(crate) const fn from_parents(
        vertex_count: usize,
        total_weight: i64,
        parents: Vec<Option<ParentLink>>,
    ) -> Self {
        Self {
            vertex_count,
            total_weight,
            encoding: ForestEncoding::Parents(parents),
        }
    }

    /// Returns the vertex count of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the total weight of the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the number of tree edges in the forest.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        match &self.encoding {
            ForestEncoding::Edges(edges) => edges.len(),
            ForestEncoding::Parents(parents) => parents.iter().flatten().count(),
        }
    }

    /// Returns the number of components in the forest structure.
    ///
    /// Every vertex without a tree edge (including vertices an engine never
    /// reached) counts as its own component.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edge_count()
    }

    /// Returns `true` when the forest is a single spanning tree.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count() <= 1
    }

    /// Returns the forest as tree edges.
    ///
    /// For an edge-list encoding this is the engine's selection order; for a
    /// parent encoding, ascending child-vertex order.
    #[must_use]
    pub fn tree_edges(&self) -> Vec<Edge> {
        match &self.encoding {
            ForestEncoding::Edges(edges) => edges.clone(),
            ForestEncoding::Parents(parents) => parents
                .iter()
                .enumerate()
                .filter_map(|(vertex, link)| {
                    link.map(|link| Edge::new(link.parent(), vertex, link.weight()))
                })
                .collect(),
        }
    }

    /// Returns the forest as per-vertex parent links.
    ///
    /// `None` marks a component root or a vertex the engine never reached.
    /// A parent encoding is returned as built; an edge-list encoding is
    /// rooted at the smallest vertex of each component.
    #[must_use]
    pub fn parent_links(&self) -> Vec<Option<ParentLink>> {
        match &self.encoding {
            ForestEncoding::Parents(parents) => parents.clone(),
            ForestEncoding::Edges(edges) => orient_edges(self.vertex_count, edges),
        }
    }
}

/// Roots each component of an acyclic edge set at its smallest vertex and
/// orients every edge away from that root.
fn orient_edges(vertex_count: usize, edges: &[Edge]) -> Vec<Option<ParentLink>> {
    let mut adjacency: Vec<Vec<(usize, i64)>> = vec![Vec::new(); vertex_count];
    for edge in edges {
        adjacency[edge.source()].push((edge.target(), edge.weight()));
        adjacency[edge.target()].push((edge.source(), edge.weight()));
    }

    let mut parents = vec![None; vertex_count];
    let mut seen = vec![false; vertex_count];
    for root in 0..vertex_count {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        let mut stack = vec![root];
        while let Some(vertex) = stack.pop() {
            for &(next, weight) in &adjacency[vertex] {
                if !seen[next] {
                    seen[next] = true;
                    parents[next] = Some(ParentLink::new(vertex, weight));
                    stack.push(next);
                }
            }
        }
    }
    parents
}

/// One engine invocation's complete output: the forest plus the metrics
/// measured while building it.
#[derive(Clone, Debug, PartialEq)]
pub struct MstRun {
    forest: SpanningForest,
    metrics: MetricsRecord,
}

impl MstRun {
    pub(crate) const fn new(forest: SpanningForest, metrics: MetricsRecord) -> Self {
        Self { forest, metrics }
    }

    /// Returns the computed spanning forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest(&self) -> &SpanningForest { &self.forest }

    /// Returns the metrics measured during the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn metrics(&self) -> &MetricsRecord { &self.metrics }

    /// Consumes the run and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (SpanningForest, MetricsRecord) {
        (self.forest, self.metrics)
    }
}
