//! Disjoint-set forest backing Kruskal's cycle detection.
//!
//! Deliberately naive: no path compression and no union-by-rank. `find`
//! walks parent pointers to the root and bills one comparison work unit per
//! call, terminal call included, so the structure's depth cost flows into
//! the reported operation counts. Because `union` always attaches the root
//! of `x` under the root of `y`, repeated merges can build long chains —
//! that growing cost is the measured quantity, not an accident.

use crate::metrics::OpCounters;

pub(super) struct DisjointSet {
    /// `None` means the vertex is its own root.
    parent: Vec<Option<usize>>,
}

impl DisjointSet {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            parent: vec![None; vertex_count],
        }
    }

    /// Returns the root of `vertex`'s set.
    pub(super) fn find(&self, vertex: usize, counters: &mut OpCounters) -> usize {
        counters.record_comparison();
        match self.parent[vertex] {
            None => vertex,
            Some(next) => self.find(next, counters),
        }
    }

    /// Merges the sets containing `x` and `y` by attaching the root of `x`
    /// under the root of `y`. Equal roots leave the forest and the union
    /// counter untouched (the two finds are still billed).
    pub(super) fn union(&mut self, x: usize, y: usize, counters: &mut OpCounters) {
        let x_root = self.find(x, counters);
        let y_root = self.find(y, counters);
        if x_root != y_root {
            self.parent[x_root] = Some(y_root);
            counters.record_union();
        }
    }
}
