//! Instrumented minimum spanning tree engines.
//!
//! Two engines compute spanning forests of the same weighted undirected
//! graph — Kruskal over a deliberately naive disjoint-set forest and Prim
//! over a lazy binary heap — while counting the comparisons, union
//! operations, and queue operations each performs, so the two approaches
//! can be compared run for run on identical input. Both engines return a
//! shared [`SpanningForest`] result plus a filled [`MetricsRecord`];
//! loaders, generators, and report writers live outside this crate.

mod error;
mod graph;
mod kruskal;
mod metrics;
mod prim;
mod result;

pub use crate::{
    error::{MstError, MstErrorCode, Result},
    graph::{Edge, Graph},
    kruskal::kruskal,
    metrics::{Algorithm, ExecutionTimer, MetricsRecord, OpCounters, TimerNotStarted},
    prim::prim,
    result::{MstRun, ParentLink, SpanningForest},
};
