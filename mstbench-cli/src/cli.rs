//! Command-line interface orchestration for mstbench.
//!
//! The CLI offers two commands: `generate` writes a batch of random labeled
//! graphs as an input JSON document, and `run` executes both MST engines on
//! every graph in such a document, writing the labeled results as JSON and
//! the per-run metrics as CSV.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use mstbench_core::{MetricsRecord, MstError, kruskal, prim};
use thiserror::Error;
use tracing::info;

use crate::input::{self, InputDocument, InputError};
use crate::report::{GraphReport, OutputDocument, SummaryRow, write_csv};

const DEFAULT_INPUT_PATH: &str = "data/input.json";
const DEFAULT_OUTPUT_PATH: &str = "data/output.json";
const DEFAULT_CSV_PATH: &str = "data/results.csv";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mstbench",
    about = "Generate weighted graphs and compare MST engines on them."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a batch of random connected graphs as an input document.
    Generate(GenerateCommand),
    /// Run both MST engines over every graph in an input document.
    Run(RunCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Where to write the generated input document.
    #[arg(long = "output", default_value = DEFAULT_INPUT_PATH)]
    pub output: PathBuf,

    /// Vertex counts to generate, one graph per count.
    #[arg(long = "sizes", value_delimiter = ',', num_args = 1..)]
    pub sizes: Option<Vec<usize>>,

    /// Seed for reproducible generation; omitted means a fresh batch each
    /// invocation.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Input document to execute.
    #[arg(long = "input", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Where to write the labeled results document.
    #[arg(long = "json-output", default_value = DEFAULT_OUTPUT_PATH)]
    pub json_output: PathBuf,

    /// Where to write the per-run metrics rows.
    #[arg(long = "csv-output", default_value = DEFAULT_CSV_PATH)]
    pub csv_output: PathBuf,

    /// Append metrics rows to an existing CSV instead of rewriting it.
    #[arg(long = "append-csv")]
    pub append_csv: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading or writing a document.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A JSON document could not be parsed or serialised.
    #[error("failed to process JSON for `{path}`: {source}")]
    Json {
        /// Path of the offending document.
        path: PathBuf,
        /// Underlying serde failure.
        #[source]
        source: serde_json::Error,
    },
    /// The input document could not be resolved into engine graphs.
    #[error(transparent)]
    Input(#[from] InputError),
    /// An engine rejected a resolved graph.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Outcome of `generate`.
    Generated {
        /// Number of graphs written.
        graphs: usize,
        /// Destination of the input document.
        path: PathBuf,
    },
    /// Outcome of `run`.
    Executed {
        /// One row per input graph.
        rows: Vec<SummaryRow>,
        /// Destination of the results document.
        json_path: PathBuf,
        /// Destination of the metrics rows.
        csv_path: PathBuf,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, execution, or report writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use mstbench_cli::cli::{Cli, Command, GenerateCommand, ExecutionSummary, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         output: dir.path().join("input.json"),
///         sizes: Some(vec![5, 10]),
///         seed: Some(7),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(matches!(summary, ExecutionSummary::Generated { graphs: 2, .. }));
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => generate_command(generate),
        Command::Run(run) => run_command(run),
    }
}

fn generate_command(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let sizes = command
        .sizes
        .as_deref()
        .unwrap_or(input::DEFAULT_SIZES);
    let document = input::generate_document(sizes, command.seed);
    write_json(&command.output, &document)?;
    info!(
        graphs = document.graphs.len(),
        path = %command.output.display(),
        "input document generated"
    );
    Ok(ExecutionSummary::Generated {
        graphs: document.graphs.len(),
        path: command.output,
    })
}

fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let document = load_input(&command.input)?;

    let mut results = Vec::with_capacity(document.graphs.len());
    let mut records: Vec<MetricsRecord> = Vec::with_capacity(document.graphs.len() * 2);
    let mut rows = Vec::with_capacity(document.graphs.len());
    for entry in &document.graphs {
        let resolved = entry.resolve()?;
        let prim_run = prim(resolved.graph())?;
        let kruskal_run = kruskal(resolved.graph())?;
        records.push(prim_run.metrics().clone());
        records.push(kruskal_run.metrics().clone());
        let report = GraphReport::new(&resolved, &prim_run, &kruskal_run);
        rows.push(SummaryRow::from_report(&report));
        results.push(report);
    }

    write_json(&command.json_output, &OutputDocument { results })?;
    write_csv(&command.csv_output, &records, command.append_csv).map_err(|source| {
        CliError::Io {
            path: command.csv_output.clone(),
            source,
        }
    })?;
    info!(
        graphs = rows.len(),
        json = %command.json_output.display(),
        csv = %command.csv_output.display(),
        "engine comparison complete"
    );

    Ok(ExecutionSummary::Executed {
        rows,
        json_path: command.json_output,
        csv_path: command.csv_output,
    })
}

fn load_input(path: &Path) -> Result<InputDocument, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| CliError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let rendered = serde_json::to_string_pretty(value).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, rendered).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated { graphs, path } => {
            writeln!(writer, "generated {graphs} graphs -> {}", path.display())?;
        }
        ExecutionSummary::Executed {
            rows,
            json_path,
            csv_path,
        } => {
            writeln!(writer, "graphs: {}", rows.len())?;
            for row in rows {
                writeln!(
                    writer,
                    "graph {}: {} vertices, {} edges",
                    row.graph_id, row.vertices, row.edges
                )?;
                for (name, algorithm) in [("Prim", &row.prim), ("Kruskal", &row.kruskal)] {
                    writeln!(
                        writer,
                        "  {name}\tcost={}\tops={}\ttime={:.3}ms",
                        algorithm.total_cost, algorithm.operations, algorithm.execution_time_ms
                    )?;
                }
            }
            writeln!(
                writer,
                "reports -> {}, {}",
                json_path.display(),
                csv_path.display()
            )?;
        }
    }
    Ok(())
}
