//! Plain-text rendering of run summaries.
//!
//! Each graph prints its adjacency matrix, incidence matrix, and adjacency
//! list, followed by a header line and one path and timing line per search.

use std::io::{self, Write};

use graphwalk_core::{Graph, PathStrategy, Weight};

use super::commands::{GraphReport, RunSummary, SearchReport};

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use graphwalk_cli::cli::{RunSummary, render_summary};
///
/// let summary = RunSummary { seed: 7, graphs: Vec::new() };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(buffer.is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    for (position, report) in summary.graphs.iter().enumerate() {
        if position > 0 {
            writeln!(writer)?;
        }
        render_graph_report(report, &mut writer)?;
    }
    Ok(())
}

/// Renders one graph and the searches run on it.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_graph_report(report: &GraphReport, mut writer: impl Write) -> io::Result<()> {
    let graph = &report.graph;
    writeln!(writer, "Adjacency matrix:")?;
    render_adjacency_matrix(graph, &mut writer)?;
    writeln!(writer, "Incidence matrix:")?;
    render_incidence_matrix(graph, &mut writer)?;
    writeln!(writer, "Adjacency list:")?;
    render_adjacency_list(graph, &mut writer)?;
    writeln!(
        writer,
        "Graph {} with {} vertices and {} edges",
        report.index,
        graph.vertex_count(),
        graph.edge_count()
    )?;
    for search in &report.searches {
        render_search(search, report.source, report.target, &mut writer)?;
    }
    Ok(())
}

/// Renders the adjacency matrix as a `0`/`1` presence grid with `V<i>`
/// row and column labels.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_adjacency_matrix(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    let rows: Vec<Vec<bool>> = graph
        .adjacency_matrix()
        .rows()
        .take(graph.vertex_count())
        .map(presence)
        .collect();
    render_grid('V', graph.vertex_count(), &rows, &mut writer)?;
    writeln!(writer)
}

/// Renders the incidence matrix as a presence grid with one `E<i>` row per
/// edge, in insertion order, and one `V<i>` column per vertex.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_incidence_matrix(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    let incidence = graph.incidence_matrix();
    let rows: Vec<Vec<bool>> = (0..incidence.edge_count())
        .map(|edge| {
            incidence
                .rows()
                .map(|vertex_row| vertex_row.get(edge).is_some_and(|cell| *cell != 0))
                .collect()
        })
        .collect();
    render_grid('E', graph.vertex_count(), &rows, &mut writer)?;
    writeln!(writer)
}

/// Renders `u: v(w) ...` for every vertex, scanning its adjacency matrix
/// row, so undirected neighbours appear under both endpoints.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_adjacency_list(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    for (vertex, row) in graph
        .adjacency_matrix()
        .rows()
        .take(graph.vertex_count())
        .enumerate()
    {
        write!(writer, "{vertex}:")?;
        for (neighbour, weight) in row.iter().enumerate().filter(|(_, w)| **w != 0) {
            write!(writer, " {neighbour}({weight})")?;
        }
        writeln!(writer)?;
    }
    writeln!(writer)
}

/// Renders the path line and the timing line of one search.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_search(
    search: &SearchReport,
    source: usize,
    target: usize,
    mut writer: impl Write,
) -> io::Result<()> {
    let label = search.strategy.label();
    let noun = describe(search.strategy);
    write!(
        writer,
        "{label} {noun} from vertex {source} to vertex {target}: "
    )?;
    if search.path.is_empty() {
        writeln!(writer, "Path does not exist")?;
    } else {
        writeln!(writer, "{}", search.path)?;
    }
    writeln!(
        writer,
        "{label} {noun} time: {:.6} seconds",
        search.elapsed.as_secs_f64()
    )
}

const fn describe(strategy: PathStrategy) -> &'static str {
    match strategy {
        PathStrategy::BreadthFirst => "shortest path",
        PathStrategy::DepthFirst => "path",
    }
}

fn presence(row: &[Weight]) -> Vec<bool> {
    row.iter().map(|weight| *weight != 0).collect()
}

fn render_grid(
    row_prefix: char,
    columns: usize,
    rows: &[Vec<bool>],
    writer: &mut impl Write,
) -> io::Result<()> {
    let cell_width = format!("V{}", columns.saturating_sub(1)).len();
    let label_width = format!("{row_prefix}{}", rows.len().saturating_sub(1)).len();

    let mut line = " ".repeat(label_width);
    for column in 0..columns {
        line.push_str(&format!(" {:<cell_width$}", format!("V{column}")));
    }
    writeln!(writer, "{}", line.trim_end())?;

    for (index, cells) in rows.iter().enumerate() {
        let mut line = format!("{:<label_width$}", format!("{row_prefix}{index}"));
        for cell in cells {
            line.push_str(&format!(" {:<cell_width$}", u8::from(*cell)));
        }
        writeln!(writer, "{}", line.trim_end())?;
    }
    Ok(())
}
