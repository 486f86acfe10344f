//! Small helpers shared across CLI tests.

use std::time::Duration;

use graphwalk_core::{Graph, Orientation, PathStrategy, VertexPath, find_path};

use super::{Cli, CliError, Command, RunCommand, RunSummary, SearchReport, run_cli};

pub(super) fn seeded_run(seed: u64, configure: impl FnOnce(&mut RunCommand)) -> Cli {
    let mut command = RunCommand {
        seed: Some(seed),
        ..RunCommand::default()
    };
    configure(&mut command);
    Cli {
        command: Command::Run(command),
    }
}

pub(super) fn run_expecting_success(cli: Cli) -> RunSummary {
    match run_cli(cli) {
        Ok(summary) => summary,
        Err(err) => panic!("run must succeed: {err}"),
    }
}

pub(super) fn run_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn graph_with(
    vertex_count: usize,
    orientation: Orientation,
    edges: &[(usize, usize, u32)],
) -> Graph {
    let mut graph = Graph::with_orientation(vertex_count, orientation);
    for &(from, to, weight) in edges {
        if let Err(err) = graph.add_weighted_edge(from, to, weight) {
            panic!("fixture edge ({from}, {to}) rejected: {err}");
        }
    }
    graph
}

/// Runs `strategy` and pins the elapsed time so rendered output is stable.
pub(super) fn fixed_search(
    graph: &Graph,
    source: usize,
    target: usize,
    strategy: PathStrategy,
) -> SearchReport {
    let path: VertexPath = match find_path(graph, source, target, strategy) {
        Ok(path) => path,
        Err(err) => panic!("search must succeed: {err}"),
    };
    SearchReport {
        strategy,
        path,
        elapsed: Duration::from_micros(1500),
    }
}

pub(super) fn render_to_string(render: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = render(&mut buffer) {
        panic!("rendering into memory must succeed: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("report must be UTF-8: {err}"),
    }
}
