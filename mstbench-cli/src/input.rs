//! Input document model and synthetic graph generation.
//!
//! The input JSON names vertices with spreadsheet-style labels (`A`..`Z`,
//! `AA`, `AB`, ...) and describes edges between labels. Labels are mapped to
//! zero-based indices in node-list order before the engines see the graph,
//! and the label table is kept so reports can translate tree edges back.

use std::collections::{HashMap, HashSet};

use mstbench_core::{Edge, Graph};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vertex counts generated when the user does not supply their own ladder.
///
/// Small sizes probe constant overheads, the medium and large bands expose
/// the engines' growth curves.
pub const DEFAULT_SIZES: &[usize] = &[
    5, 10, 15, 20, 25, 30, 50, 100, 150, 200, 250, 300, 350, 400, 450, 500, 550, 600, 650, 700,
    750, 800, 850, 900, 1000, 1300, 1500, 2000,
];

/// Weights are drawn uniformly from this inclusive range.
const WEIGHT_RANGE: std::ops::RangeInclusive<i64> = 1500..=4000;

/// Top-level input document: a batch of labeled graphs.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InputDocument {
    /// Graphs to run, in document order.
    pub graphs: Vec<GraphEntry>,
}

/// One labeled graph in the input document.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GraphEntry {
    /// Caller-assigned identifier carried through to reports.
    pub id: u32,
    /// Vertex labels; list order defines the index of each vertex.
    pub nodes: Vec<String>,
    /// Edges between labels, in document order.
    pub edges: Vec<LabeledEdge>,
}

/// An edge between two labeled vertices.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LabeledEdge {
    /// Label of the first endpoint.
    pub from: String,
    /// Label of the second endpoint.
    pub to: String,
    /// Edge weight.
    pub weight: i64,
}

/// Errors raised while resolving an input document into engine graphs.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum InputError {
    /// The same label appears twice in a graph's node list.
    #[error("graph {graph_id} declares node label `{label}` more than once")]
    DuplicateNodeLabel {
        /// Identifier of the offending graph.
        graph_id: u32,
        /// The repeated label.
        label: String,
    },
    /// An edge references a label missing from the node list.
    #[error("graph {graph_id} has an edge referencing unknown node label `{label}`")]
    UnknownNodeLabel {
        /// Identifier of the offending graph.
        graph_id: u32,
        /// The unresolved label.
        label: String,
    },
}

/// A graph ready for the engines, paired with the label table needed to
/// translate tree edges back into the document's vocabulary.
#[derive(Clone, Debug)]
pub struct ResolvedGraph {
    graph: Graph,
    labels: Vec<String>,
}

impl ResolvedGraph {
    /// Returns the index-based graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Returns the vertex labels in index order.
    #[must_use]
    #[rustfmt::skip]
    pub fn labels(&self) -> &[String] { &self.labels }
}

impl GraphEntry {
    /// Maps the entry's labeled edges onto zero-based vertex indices.
    ///
    /// # Errors
    /// Returns [`InputError`] when a node label is declared twice or an edge
    /// references a label the node list does not declare.
    pub fn resolve(&self) -> Result<ResolvedGraph, InputError> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for (position, label) in self.nodes.iter().enumerate() {
            if index.insert(label.as_str(), position).is_some() {
                return Err(InputError::DuplicateNodeLabel {
                    graph_id: self.id,
                    label: label.clone(),
                });
            }
        }

        let lookup = |label: &str| {
            index
                .get(label)
                .copied()
                .ok_or_else(|| InputError::UnknownNodeLabel {
                    graph_id: self.id,
                    label: label.to_owned(),
                })
        };

        let mut edges = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            edges.push(Edge::new(
                lookup(&edge.from)?,
                lookup(&edge.to)?,
                edge.weight,
            ));
        }

        Ok(ResolvedGraph {
            graph: Graph::new(self.id, self.nodes.len(), edges),
            labels: self.nodes.clone(),
        })
    }
}

/// Returns the spreadsheet-style label for a zero-based vertex index
/// (`0 -> A`, `25 -> Z`, `26 -> AA`, ...).
#[must_use]
pub fn label_for_index(index: usize) -> String {
    let mut digits = Vec::new();
    let mut n = index;
    loop {
        digits.push(b'A' + (n % 26) as u8);
        match (n / 26).checked_sub(1) {
            Some(next) => n = next,
            None => break,
        }
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Generates a batch of random connected graphs, one per requested size.
///
/// Each graph starts as a random spanning tree (vertex `v >= 1` attaches to
/// a uniform earlier vertex) so connectivity is guaranteed, then extra edges
/// are added until half the maximum possible edge count is reached. Weights
/// are uniform in `1500..=4000`. The same seed reproduces the same document.
#[must_use]
pub fn generate_document(sizes: &[usize], seed: Option<u64>) -> InputDocument {
    let mut rng = seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
    let graphs = sizes
        .iter()
        .enumerate()
        .map(|(offset, &vertex_count)| {
            let id = u32::try_from(offset).unwrap_or(u32::MAX).saturating_add(1);
            generate_graph(&mut rng, id, vertex_count)
        })
        .collect();
    InputDocument { graphs }
}

fn generate_graph(rng: &mut SmallRng, id: u32, vertex_count: usize) -> GraphEntry {
    let nodes: Vec<String> = (0..vertex_count).map(label_for_index).collect();

    let mut present = HashSet::new();
    let mut edges = Vec::new();
    let push_edge = |edges: &mut Vec<LabeledEdge>,
                      present: &mut HashSet<(usize, usize)>,
                      u: usize,
                      v: usize,
                      weight: i64| {
        present.insert((u.min(v), u.max(v)));
        edges.push(LabeledEdge {
            from: label_for_index(u),
            to: label_for_index(v),
            weight,
        });
    };

    // Spanning tree first: every vertex after the first attaches to an
    // earlier one, so the graph is connected by construction.
    for v in 1..vertex_count {
        let u = rng.gen_range(0..v);
        push_edge(&mut edges, &mut present, u, v, rng.gen_range(WEIGHT_RANGE));
    }

    let max_possible = vertex_count * vertex_count.saturating_sub(1) / 2;
    let target = max_possible / 2;
    while edges.len() < target {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v && !present.contains(&(u.min(v), u.max(v))) {
            push_edge(&mut edges, &mut present, u, v, rng.gen_range(WEIGHT_RANGE));
        }
    }

    GraphEntry { id, nodes, edges }
}
