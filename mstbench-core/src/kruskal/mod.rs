//! Kruskal's minimum spanning forest over a naive disjoint-set forest.
//!
//! Edges are stable-sorted ascending by weight, so ties keep their
//! construction order and the selected forest is deterministic for a given
//! input sequence — two inputs differing only in edge order may produce
//! different, equally minimal forests. Selection stops as soon as
//! `vertex_count - 1` edges are in; disconnected input exhausts the sorted
//! sequence instead and yields a spanning forest with fewer edges.

mod union_find;

#[cfg(test)]
mod tests;

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{Graph, ensure_endpoints_in_bounds},
    metrics::{Algorithm, ExecutionTimer, MetricsRecord, OpCounters},
    result::{MstRun, SpanningForest},
};

use self::union_find::DisjointSet;

/// Computes a minimum spanning forest of `graph` with Kruskal's algorithm.
///
/// The forest spans every connected component. On disconnected input it
/// holds fewer than `vertex_count - 1` edges, which is a valid outcome the
/// result type makes observable rather than an error.
///
/// # Errors
///
/// Returns [`MstError::InvalidEdgeEndpoint`](crate::MstError::InvalidEdgeEndpoint)
/// when an edge references a vertex outside `[0, vertex_count)`.
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph),
    fields(
        graph_id = graph.id(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
    ),
)]
pub fn kruskal(graph: &Graph) -> Result<MstRun> {
    ensure_endpoints_in_bounds(graph)?;

    let mut counters = OpCounters::default();
    let mut timer = ExecutionTimer::default();
    timer.start();

    let vertex_count = graph.vertex_count();
    let mut forest = DisjointSet::new(vertex_count);

    let mut sorted = graph.edges().to_vec();
    // Stable sort: equal weights keep input order, the tie-break contract.
    sorted.sort_by_key(|edge| edge.weight());

    let mut total_weight = 0i64;
    let mut selected = Vec::new();
    for edge in sorted {
        let x = forest.find(edge.source(), &mut counters);
        let y = forest.find(edge.target(), &mut counters);
        if x != y {
            forest.union(x, y, &mut counters);
            total_weight += edge.weight();
            selected.push(edge);
            if selected.len() == vertex_count.saturating_sub(1) {
                break;
            }
        }
    }

    let execution_time_ms = timer.stop()?;
    debug!(
        total_weight,
        selected = selected.len(),
        "edge selection complete"
    );

    let metrics = MetricsRecord::new(
        graph.id(),
        vertex_count,
        graph.edge_count(),
        Algorithm::Kruskal,
        total_weight,
        counters,
        execution_time_ms,
    );
    Ok(MstRun::new(
        SpanningForest::from_edges(vertex_count, total_weight, selected),
        metrics,
    ))
}
