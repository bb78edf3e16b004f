//! Report serialization: the output JSON document and the per-run CSV.
//!
//! Tree edges are translated back into the input document's node labels so
//! reports read in the same vocabulary the input was written in. The CSV
//! carries one row per `(graph, algorithm)` pair with the aggregate
//! operation count and the wall-clock time at three decimals.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use mstbench_core::{MetricsRecord, MstRun};
use serde::Serialize;

use crate::input::{LabeledEdge, ResolvedGraph};

/// Top-level output document: one report per input graph.
#[derive(Clone, Debug, Serialize)]
pub struct OutputDocument {
    /// Reports in input-document order.
    pub results: Vec<GraphReport>,
}

/// Input-size echo attached to each graph report.
#[derive(Clone, Debug, Serialize)]
pub struct InputStats {
    /// Vertex count of the input graph.
    pub vertices: usize,
    /// Edge count of the input graph.
    pub edges: usize,
}

/// Both engines' results for one input graph.
#[derive(Clone, Debug, Serialize)]
pub struct GraphReport {
    /// Identifier of the input graph.
    pub graph_id: u32,
    /// Size of the input graph.
    pub input_stats: InputStats,
    /// Prim's tree of the root component.
    pub prim: AlgorithmReport,
    /// Kruskal's spanning forest.
    pub kruskal: AlgorithmReport,
}

/// One engine's result rendered for the output document.
#[derive(Clone, Debug, Serialize)]
pub struct AlgorithmReport {
    /// Selected tree edges in the input document's labels.
    pub mst_edges: Vec<LabeledEdge>,
    /// Total weight of the selected edges.
    pub total_cost: i64,
    /// Sum of comparisons, unions, and queue operations.
    pub operations_count: u64,
    /// Measured wall-clock duration in milliseconds.
    pub execution_time_ms: f64,
}

impl AlgorithmReport {
    /// Renders an engine run against the label table of its input graph.
    #[must_use]
    pub fn from_run(run: &MstRun, labels: &[String]) -> Self {
        let mst_edges = run
            .forest()
            .tree_edges()
            .iter()
            .map(|edge| LabeledEdge {
                from: labels[edge.source()].clone(),
                to: labels[edge.target()].clone(),
                weight: edge.weight(),
            })
            .collect();
        Self {
            mst_edges,
            total_cost: run.forest().total_weight(),
            operations_count: run.metrics().total_operations(),
            execution_time_ms: run.metrics().execution_time_ms(),
        }
    }
}

impl GraphReport {
    /// Assembles the per-graph report from both engines' runs.
    #[must_use]
    pub fn new(resolved: &ResolvedGraph, prim_run: &MstRun, kruskal_run: &MstRun) -> Self {
        let graph = resolved.graph();
        Self {
            graph_id: graph.id(),
            input_stats: InputStats {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
            },
            prim: AlgorithmReport::from_run(prim_run, resolved.labels()),
            kruskal: AlgorithmReport::from_run(kruskal_run, resolved.labels()),
        }
    }
}

/// Condensed per-graph line for the stdout summary.
#[derive(Clone, Debug)]
pub struct SummaryRow {
    /// Identifier of the input graph.
    pub graph_id: u32,
    /// Vertex count of the input graph.
    pub vertices: usize,
    /// Edge count of the input graph.
    pub edges: usize,
    /// Prim's headline numbers.
    pub prim: AlgorithmSummary,
    /// Kruskal's headline numbers.
    pub kruskal: AlgorithmSummary,
}

/// One engine's headline numbers for the stdout summary.
#[derive(Clone, Debug)]
pub struct AlgorithmSummary {
    /// Total weight of the selected edges.
    pub total_cost: i64,
    /// Sum of comparisons, unions, and queue operations.
    pub operations: u64,
    /// Measured wall-clock duration in milliseconds.
    pub execution_time_ms: f64,
}

impl SummaryRow {
    /// Condenses a graph report into its summary line.
    #[must_use]
    pub fn from_report(report: &GraphReport) -> Self {
        let condense = |algorithm: &AlgorithmReport| AlgorithmSummary {
            total_cost: algorithm.total_cost,
            operations: algorithm.operations_count,
            execution_time_ms: algorithm.execution_time_ms,
        };
        Self {
            graph_id: report.graph_id,
            vertices: report.input_stats.vertices,
            edges: report.input_stats.edges,
            prim: condense(&report.prim),
            kruskal: condense(&report.kruskal),
        }
    }
}

const CSV_HEADER: &str = "graph_id,vertices,edges,algorithm,total_cost,operations_count,execution_time_ms";

/// Writes one CSV row per metrics record to `path`, creating the parent
/// directory if it does not exist.
///
/// In append mode the header is skipped so successive runs accumulate into
/// one file; otherwise the file is truncated and the header written first.
///
/// # Errors
/// Returns [`io::Error`] when the file cannot be opened or written.
pub fn write_csv(path: &Path, records: &[MetricsRecord], append: bool) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = if append {
        OpenOptions::new().create(true).append(true).open(path)?
    } else {
        File::create(path)?
    };
    let mut writer = BufWriter::new(file);
    if !append {
        writeln!(writer, "{CSV_HEADER}")?;
    }
    for record in records {
        writeln!(writer, "{}", csv_row(record))?;
    }
    writer.flush()
}

fn csv_row(record: &MetricsRecord) -> String {
    format!(
        "{},{},{},{},{},{},{:.3}",
        record.graph_id(),
        record.vertices(),
        record.edges(),
        record.algorithm(),
        record.total_cost(),
        record.total_operations(),
        record.execution_time_ms(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use mstbench_core::{kruskal, prim};
    use tempfile::TempDir;

    use crate::input::{GraphEntry, LabeledEdge};

    fn k4_entry() -> GraphEntry {
        GraphEntry {
            id: 1,
            nodes: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            edges: [
                ("A", "B", 1),
                ("A", "C", 4),
                ("A", "D", 3),
                ("B", "C", 2),
                ("B", "D", 5),
                ("C", "D", 6),
            ]
            .into_iter()
            .map(|(from, to, weight)| LabeledEdge {
                from: from.to_owned(),
                to: to.to_owned(),
                weight,
            })
            .collect(),
        }
    }

    #[test]
    fn reports_translate_tree_edges_back_to_labels() {
        let resolved = k4_entry().resolve().expect("labels must resolve");
        let prim_run = prim(resolved.graph()).expect("prim must succeed");
        let kruskal_run = kruskal(resolved.graph()).expect("kruskal must succeed");
        let report = GraphReport::new(&resolved, &prim_run, &kruskal_run);

        assert_eq!(report.graph_id, 1);
        assert_eq!(report.input_stats.vertices, 4);
        assert_eq!(report.input_stats.edges, 6);
        for algorithm in [&report.prim, &report.kruskal] {
            assert_eq!(algorithm.total_cost, 6);
            assert_eq!(algorithm.mst_edges.len(), 3);
        }
        // Prim's rooted view lists edges parent-first in child order.
        let prim_pairs: Vec<(&str, &str)> = report
            .prim
            .mst_edges
            .iter()
            .map(|edge| (edge.from.as_str(), edge.to.as_str()))
            .collect();
        assert_eq!(prim_pairs, vec![("A", "B"), ("B", "C"), ("A", "D")]);
    }

    #[test]
    fn output_document_uses_the_report_vocabulary() {
        let resolved = k4_entry().resolve().expect("labels must resolve");
        let prim_run = prim(resolved.graph()).expect("prim must succeed");
        let kruskal_run = kruskal(resolved.graph()).expect("kruskal must succeed");
        let document = OutputDocument {
            results: vec![GraphReport::new(&resolved, &prim_run, &kruskal_run)],
        };

        let value = serde_json::to_value(&document).expect("document must serialise");
        let result = &value["results"][0];
        assert_eq!(result["graph_id"], 1);
        assert_eq!(result["input_stats"]["vertices"], 4);
        assert_eq!(result["prim"]["total_cost"], 6);
        assert_eq!(result["kruskal"]["total_cost"], 6);
        assert!(result["kruskal"]["mst_edges"][0]["from"].is_string());
        assert!(result["prim"]["execution_time_ms"].is_number());
    }

    #[test]
    fn csv_rows_carry_identity_and_three_decimal_time() {
        let resolved = k4_entry().resolve().expect("labels must resolve");
        let run = kruskal(resolved.graph()).expect("kruskal must succeed");
        let row = csv_row(run.metrics());
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields[0], "1");
        assert_eq!(fields[1], "4");
        assert_eq!(fields[2], "6");
        assert_eq!(fields[3], "Kruskal");
        assert_eq!(fields[4], "6");
        let (_, decimals) = fields[6].split_once('.').expect("time must have decimals");
        assert_eq!(decimals.len(), 3);
    }

    #[test]
    fn write_csv_creates_missing_parent_directories() -> io::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("data").join("results.csv");
        let resolved = k4_entry().resolve().expect("labels must resolve");
        let run = kruskal(resolved.graph()).expect("kruskal must succeed");

        write_csv(&path, &[run.metrics().clone()], false)?;

        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(contents.lines().count(), 2);
        Ok(())
    }

    #[test]
    fn write_csv_truncates_then_appends() -> io::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("results.csv");
        let resolved = k4_entry().resolve().expect("labels must resolve");
        let run = kruskal(resolved.graph()).expect("kruskal must succeed");
        let records = vec![run.metrics().clone()];

        write_csv(&path, &records, false)?;
        write_csv(&path, &records, true)?;

        let contents = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], lines[2]);
        Ok(())
    }
}
