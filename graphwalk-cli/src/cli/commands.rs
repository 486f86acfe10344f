//! Command implementations and argument parsing for the graphwalk CLI.

use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use graphwalk_core::{
    GeneratorError, GeneratorParams, Graph, GraphError, Orientation, PathStrategy,
    RandomGraphGenerator, VertexId, VertexPath, find_path,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, debug, field, info, instrument};

const DEFAULT_GRAPHS: usize = 10;
const DEFAULT_VERTICES: usize = 10;
const DEFAULT_EDGES: usize = 10;
const DEFAULT_MAX_EDGES_PER_VERTEX: usize = 10;
const DEFAULT_MAX_DIRECTED_DEGREE: usize = 1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphwalk",
    about = "Generate random graphs and compare BFS and DFS path finding."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate graphs, print their representations, and search each one.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct RunCommand {
    /// Number of graphs to generate.
    #[arg(long, default_value_t = DEFAULT_GRAPHS)]
    pub graphs: usize,

    /// Smallest vertex count to draw.
    #[arg(long, default_value_t = DEFAULT_VERTICES)]
    pub min_vertices: usize,

    /// Largest vertex count to draw.
    #[arg(long, default_value_t = DEFAULT_VERTICES)]
    pub max_vertices: usize,

    /// Smallest edge count to draw.
    #[arg(long, default_value_t = DEFAULT_EDGES)]
    pub min_edges: usize,

    /// Largest edge count to draw.
    #[arg(long, default_value_t = DEFAULT_EDGES)]
    pub max_edges: usize,

    /// Upper bound on the degree of any vertex.
    #[arg(long, default_value_t = DEFAULT_MAX_EDGES_PER_VERTEX)]
    pub max_edges_per_vertex: usize,

    /// Generate directed graphs.
    #[arg(long)]
    pub directed: bool,

    /// Upper bound on in-degree; directed graphs only.
    #[arg(long, default_value_t = DEFAULT_MAX_DIRECTED_DEGREE)]
    pub max_incoming_edges: usize,

    /// Upper bound on out-degree; directed graphs only.
    #[arg(long, default_value_t = DEFAULT_MAX_DIRECTED_DEGREE)]
    pub max_outgoing_edges: usize,

    /// Search start; drawn at random per graph when omitted.
    #[arg(long)]
    pub source: Option<VertexId>,

    /// Search goal; drawn at random per graph when omitted.
    #[arg(long)]
    pub target: Option<VertexId>,

    /// Seed for every random choice in the run; drawn from entropy when
    /// omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for RunCommand {
    fn default() -> Self {
        Self {
            graphs: DEFAULT_GRAPHS,
            min_vertices: DEFAULT_VERTICES,
            max_vertices: DEFAULT_VERTICES,
            min_edges: DEFAULT_EDGES,
            max_edges: DEFAULT_EDGES,
            max_edges_per_vertex: DEFAULT_MAX_EDGES_PER_VERTEX,
            directed: false,
            max_incoming_edges: DEFAULT_MAX_DIRECTED_DEGREE,
            max_outgoing_edges: DEFAULT_MAX_DIRECTED_DEGREE,
            source: None,
            target: None,
            seed: None,
        }
    }
}

impl RunCommand {
    fn orientation(&self) -> Orientation {
        if self.directed {
            Orientation::Directed
        } else {
            Orientation::Undirected
        }
    }

    fn generator_params(&self) -> Result<GeneratorParams, GeneratorError> {
        Ok(
            GeneratorParams::new(
                self.min_vertices..=self.max_vertices,
                self.min_edges..=self.max_edges,
            )?
            .with_orientation(self.orientation())
            .with_max_edges_per_vertex(self.max_edges_per_vertex)
            .with_max_incoming_edges(self.max_incoming_edges)
            .with_max_outgoing_edges(self.max_outgoing_edges),
        )
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A user-supplied endpoint does not exist in a generated graph.
    #[error("--{role} {vertex} is out of range for graph {graph} with {vertex_count} vertices")]
    InvalidVertex {
        /// Which endpoint was rejected: `source` or `target`.
        role: &'static str,
        /// The rejected vertex.
        vertex: VertexId,
        /// One-based index of the graph.
        graph: usize,
        /// Number of vertices in that graph.
        vertex_count: usize,
    },
    /// A generated graph has no vertices to pick an endpoint from.
    #[error("graph {graph} has no vertices to search between")]
    EmptyGraph {
        /// One-based index of the graph.
        graph: usize,
    },
    /// Graph generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// A graph operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the stable code of the wrapped core error, if any.
    #[must_use]
    pub const fn core_code(&self) -> Option<&'static str> {
        match self {
            Self::Generator(err) => Some(err.code().as_str()),
            Self::Graph(err) => Some(err.code().as_str()),
            Self::InvalidVertex { .. } | Self::EmptyGraph { .. } => None,
        }
    }
}

/// Outcome of one search on one graph.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Search that produced the path.
    pub strategy: PathStrategy,
    /// The path found; empty when the target is unreachable.
    pub path: VertexPath,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
}

/// A generated graph with the searches run on it.
#[derive(Debug, Clone)]
pub struct GraphReport {
    /// One-based position in the run.
    pub index: usize,
    /// The generated graph.
    pub graph: Graph,
    /// Start vertex shared by every search.
    pub source: VertexId,
    /// Goal vertex shared by every search.
    pub target: VertexId,
    /// One entry per [`PathStrategy`], in [`PathStrategy::ALL`] order.
    pub searches: Vec<SearchReport>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Seed that reproduces the run.
    pub seed: u64,
    /// Reports in generation order.
    pub graphs: Vec<GraphReport>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or a search fails.
///
/// # Examples
/// ```
/// use graphwalk_cli::cli::{Cli, Command, RunCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         graphs: 2,
///         seed: Some(42),
///         ..RunCommand::default()
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graphs.len(), 2);
/// assert_eq!(summary.graphs[0].graph.vertex_count(), 10);
/// # Ok::<(), graphwalk_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<RunSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(&run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        graphs = command.graphs,
        orientation = ?command.orientation(),
        seed = field::Empty,
    ),
)]
fn run_command(command: &RunCommand) -> Result<RunSummary, CliError> {
    let generator = RandomGraphGenerator::new(command.generator_params()?);
    let seed = command.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut graphs = Vec::with_capacity(command.graphs);
    for index in 1..=command.graphs {
        let graph = generator.generate_with(&mut rng)?;
        debug!(
            graph = index,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "generated graph"
        );
        let source = pick_endpoint("source", command.source, &graph, index, &mut rng)?;
        let target = pick_endpoint("target", command.target, &graph, index, &mut rng)?;
        let searches = PathStrategy::ALL
            .into_iter()
            .map(|strategy| timed_search(&graph, source, target, strategy))
            .collect::<Result<Vec<_>, _>>()?;
        graphs.push(GraphReport {
            index,
            graph,
            source,
            target,
            searches,
        });
    }

    info!(graphs = graphs.len(), seed, "command completed");
    Ok(RunSummary { seed, graphs })
}

pub(super) fn pick_endpoint<R: Rng>(
    role: &'static str,
    requested: Option<VertexId>,
    graph: &Graph,
    index: usize,
    rng: &mut R,
) -> Result<VertexId, CliError> {
    let vertex_count = graph.vertex_count();
    match requested {
        Some(vertex) if vertex < vertex_count => Ok(vertex),
        Some(vertex) => Err(CliError::InvalidVertex {
            role,
            vertex,
            graph: index,
            vertex_count,
        }),
        None if vertex_count == 0 => Err(CliError::EmptyGraph { graph: index }),
        None => Ok(rng.gen_range(0..vertex_count)),
    }
}

fn timed_search(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
    strategy: PathStrategy,
) -> Result<SearchReport, GraphError> {
    let started = Instant::now();
    let path = find_path(graph, source, target, strategy)?;
    Ok(SearchReport {
        strategy,
        path,
        elapsed: started.elapsed(),
    })
}
