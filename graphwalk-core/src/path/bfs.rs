//! Breadth-first hop-count shortest path.

use std::collections::VecDeque;

use tracing::{Span, field, instrument};

use crate::{
    error::Result,
    graph::{Graph, VertexId},
};

use super::{
    VertexPath,
    search::{SearchState, successors},
};

/// Returns a path from `source` to `target` with the fewest edges.
///
/// Weights are ignored. Among equally short paths, the one discovered first
/// when neighbours are scanned in ascending index order wins. When
/// `source == target` the path is `[source]`; when `target` is unreachable
/// the path is empty.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] when `source` or `target`
/// is not a vertex of `graph`.
///
/// # Examples
/// ```
/// use graphwalk_core::{Graph, bfs_shortest_path};
///
/// let mut graph = Graph::new(4);
/// graph.add_weighted_edge(0, 1, 5)?;
/// graph.add_weighted_edge(1, 2, 3)?;
/// graph.add_weighted_edge(0, 2, 1)?;
/// graph.add_weighted_edge(2, 3, 4)?;
/// assert_eq!(bfs_shortest_path(&graph, 0, 3)?.vertices(), &[0, 2, 3]);
/// # Ok::<(), graphwalk_core::GraphError>(())
/// ```
#[instrument(
    name = "core.bfs",
    level = "debug",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), visited = field::Empty, hops = field::Empty),
)]
pub fn bfs_shortest_path(graph: &Graph, source: VertexId, target: VertexId) -> Result<VertexPath> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;

    let matrix = graph.adjacency_matrix();
    let mut state = SearchState::new(graph.vertex_count(), source);
    let mut frontier = VecDeque::from([source]);

    while let Some(vertex) = frontier.pop_front() {
        for next in successors(matrix.row(vertex)?) {
            if state.discover(vertex, next) {
                frontier.push_back(next);
            }
        }
    }

    let path = state.path_to(target);
    let span = Span::current();
    span.record("visited", state.visited_count());
    if !path.is_empty() {
        span.record("hops", path.hop_count());
    }
    Ok(path)
}
