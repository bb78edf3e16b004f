//! Prim's minimum spanning tree grown from vertex 0.
//!
//! The frontier is a binary min-heap without decrease-key: improving a
//! vertex pushes a fresh entry, and the superseded one is discarded lazily
//! when popped. Discarded pops still count as queue operations, which
//! inflates the queue totals relative to a decrease-key heap and keeps runs
//! comparable with each other. The root is always vertex 0 and the engine
//! never restarts in another component, so vertices unreachable from the
//! root stay unvisited with no parent link and contribute nothing to the
//! total weight.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use crate::{
    error::{MstError, Result},
    graph::{Graph, ensure_endpoints_in_bounds},
    metrics::{Algorithm, ExecutionTimer, MetricsRecord, OpCounters},
    result::{MstRun, ParentLink, SpanningForest},
};

/// Frontier entry. Derived ordering compares weight first, then vertex, so
/// equal-weight entries pop in a total, documented order.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct QueueEntry {
    weight: i64,
    vertex: usize,
}

/// Computes a minimum spanning tree of vertex 0's component with Prim's
/// algorithm.
///
/// On disconnected input the tree covers the root's component only — unlike
/// [`kruskal`](crate::kruskal), which spans every component. The returned
/// parent view marks unreached vertices with `None`.
///
/// # Errors
///
/// Returns [`MstError::EmptyGraph`] when `vertex_count == 0` (the fixed
/// root does not exist) and
/// [`MstError::InvalidEdgeEndpoint`] when an edge references a vertex
/// outside `[0, vertex_count)`.
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(
        graph_id = graph.id(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
    ),
)]
pub fn prim(graph: &Graph) -> Result<MstRun> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }
    ensure_endpoints_in_bounds(graph)?;

    let mut counters = OpCounters::default();
    let mut timer = ExecutionTimer::default();
    timer.start();

    let mut visited = vec![false; vertex_count];
    let mut min_weight = vec![i64::MAX; vertex_count];
    let mut parent: Vec<Option<ParentLink>> = vec![None; vertex_count];
    min_weight[0] = 0;

    let mut queue = BinaryHeap::new();
    // Seeding the root is setup, not a counted queue operation.
    queue.push(Reverse(QueueEntry {
        weight: 0,
        vertex: 0,
    }));

    let mut total_weight = 0i64;
    while let Some(Reverse(entry)) = queue.pop() {
        counters.record_pq_operation();
        let current = entry.vertex;
        if visited[current] {
            // Stale entry superseded by a lighter push; discard lazily.
            continue;
        }
        visited[current] = true;
        total_weight += entry.weight;

        for edge in graph.edges() {
            let neighbour = if edge.source() == current {
                edge.target()
            } else if edge.target() == current {
                edge.source()
            } else {
                continue;
            };
            if visited[neighbour] {
                continue;
            }
            counters.record_comparison();
            if edge.weight() < min_weight[neighbour] {
                min_weight[neighbour] = edge.weight();
                parent[neighbour] = Some(ParentLink::new(current, edge.weight()));
                queue.push(Reverse(QueueEntry {
                    weight: edge.weight(),
                    vertex: neighbour,
                }));
                counters.record_pq_operation();
            }
        }
    }

    let execution_time_ms = timer.stop()?;
    debug!(
        total_weight,
        reached = visited.iter().filter(|&&seen| seen).count(),
        "tree growth complete"
    );

    let metrics = MetricsRecord::new(
        graph.id(),
        vertex_count,
        graph.edge_count(),
        Algorithm::Prim,
        total_weight,
        counters,
        execution_time_ms,
    );
    Ok(MstRun::new(
        SpanningForest::from_parents(vertex_count, total_weight, parent),
        metrics,
    ))
}
