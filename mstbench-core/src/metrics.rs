//! Operation counters and wall-clock measurement for engine runs.
//!
//! Each engine invocation owns one [`OpCounters`] value and returns it to
//! the caller inside a [`MetricsRecord`]; nothing is shared between runs.
//! The counters model work units rather than literal weight comparisons —
//! a disjoint-set `find` bills one comparison per step even though it
//! compares no weights, so the naive structure's cost shows up in the
//! totals the two engines are compared on.

use std::fmt;
use std::time::Instant;

use thiserror::Error;

/// Identifies which engine produced a metrics record.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Kruskal's algorithm over a disjoint-set forest.
    Kruskal,
    /// Prim's algorithm over a lazy min-priority queue.
    Prim,
}

impl Algorithm {
    /// Returns the stable report name for the engine.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract error raised when a timer is stopped without having been
/// started.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("run timer was stopped before it was started")]
pub struct TimerNotStarted;

/// Smallest duration a run may report once any time at all has elapsed.
///
/// A strictly positive measurement that would print as `0.000` ms is
/// indistinguishable from "not measured", so it is clamped up to this value.
const MIN_REPORTABLE_MS: f64 = 0.001;

/// Monotonic wall-clock timer for a single engine run.
///
/// # Examples
/// ```
/// use mstbench_core::ExecutionTimer;
///
/// let mut timer = ExecutionTimer::default();
/// timer.start();
/// let elapsed_ms = timer.stop().expect("timer was started");
/// assert!(elapsed_ms >= 0.0);
/// ```
#[derive(Debug, Default)]
pub struct ExecutionTimer {
    started: Option<Instant>,
}

impl ExecutionTimer {
    /// Starts (or restarts) the timer.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stops the timer and returns the elapsed milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimerNotStarted`] when the timer was never started, or was
    /// already consumed by a previous `stop`.
    pub fn stop(&mut self) -> Result<f64, TimerNotStarted> {
        let started = self.started.take().ok_or(TimerNotStarted)?;
        Ok(clamped_millis(started.elapsed().as_nanos()))
    }
}

fn clamped_millis(nanos: u128) -> f64 {
    let millis = nanos as f64 / 1_000_000.0;
    if nanos > 0 && millis < MIN_REPORTABLE_MS {
        MIN_REPORTABLE_MS
    } else {
        millis
    }
}

/// Counter block accumulated by one engine invocation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OpCounters {
    comparisons: u64,
    unions: u64,
    pq_operations: u64,
}

impl OpCounters {
    pub(crate) fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub(crate) fn record_union(&mut self) {
        self.unions += 1;
    }

    pub(crate) fn record_pq_operation(&mut self) {
        self.pq_operations += 1;
    }

    /// Returns the number of comparison work units performed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn comparisons(&self) -> u64 { self.comparisons }

    /// Returns the number of component merges performed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn unions(&self) -> u64 { self.unions }

    /// Returns the number of priority-queue pushes and pops performed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn pq_operations(&self) -> u64 { self.pq_operations }

    /// Returns the sum of all counted operations.
    #[must_use]
    pub const fn total_operations(&self) -> u64 {
        self.comparisons + self.unions + self.pq_operations
    }
}

/// Per-run metrics: identity fields fixed at construction, measurements
/// filled in by exactly one engine invocation, immutable afterwards.
///
/// Consumed by external CSV and report writers.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsRecord {
    graph_id: u32,
    vertices: usize,
    edges: usize,
    algorithm: Algorithm,
    total_cost: i64,
    counters: OpCounters,
    execution_time_ms: f64,
}

impl MetricsRecord {
    pub(crate) const fn new(
        graph_id: u32,
        vertices: usize,
        edges: usize,
        algorithm: Algorithm,
        total_cost: i64,
        counters: OpCounters,
        execution_time_ms: f64,
    ) -> Self {
        Self {
            graph_id,
            vertices,
            edges,
            algorithm,
            total_cost,
            counters,
            execution_time_ms,
        }
    }

    /// Returns the identifier of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph_id(&self) -> u32 { self.graph_id }

    /// Returns the vertex count of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertices(&self) -> usize { self.vertices }

    /// Returns the edge count of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> usize { self.edges }

    /// Returns the engine that produced this record.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the total weight of the computed tree/forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> i64 { self.total_cost }

    /// Returns the counter block accumulated during the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn counters(&self) -> OpCounters { self.counters }

    /// Returns the number of comparison work units performed.
    #[must_use]
    pub const fn comparisons(&self) -> u64 {
        self.counters.comparisons()
    }

    /// Returns the number of component merges performed.
    #[must_use]
    pub const fn unions(&self) -> u64 {
        self.counters.unions()
    }

    /// Returns the number of priority-queue pushes and pops performed.
    #[must_use]
    pub const fn pq_operations(&self) -> u64 {
        self.counters.pq_operations()
    }

    /// Returns the sum of all counted operations.
    #[must_use]
    pub const fn total_operations(&self) -> u64 {
        self.counters.total_operations()
    }

    /// Returns the measured wall-clock duration in milliseconds.
    #[must_use]
    #[rustfmt::skip]
    pub const fn execution_time_ms(&self) -> f64 { self.execution_time_ms }
}

impl fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "metrics{{graph_id={}, vertices={}, edges={}, algorithm={}, total_cost={}, \
             comparisons={}, unions={}, pq_operations={}, total_operations={}, time_ms={:.3}}}",
            self.graph_id,
            self.vertices,
            self.edges,
            self.algorithm,
            self.total_cost,
            self.comparisons(),
            self.unions(),
            self.pq_operations(),
            self.total_operations(),
            self.execution_time_ms,
        )
    }
}
