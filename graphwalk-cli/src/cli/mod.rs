//! Command-line interface orchestration for graphwalk.
//!
//! The CLI offers a `run` command that generates a batch of random graphs,
//! prints their representations, and compares breadth- and depth-first path
//! finding on each one.

mod commands;
mod report;

pub use commands::{Cli, CliError, Command, GraphReport, RunCommand, RunSummary, SearchReport, run_cli};
pub use report::{
    render_adjacency_list, render_adjacency_matrix, render_graph_report, render_incidence_matrix,
    render_search, render_summary,
};

#[cfg(test)]
mod test_helpers;
