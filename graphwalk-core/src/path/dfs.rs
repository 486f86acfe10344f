//! Depth-first path discovery.

use tracing::{Span, field, instrument};

use crate::{
    error::Result,
    graph::{Graph, VertexId},
};

use super::{
    VertexPath,
    search::{SearchState, successors},
};

/// Returns the path from `source` to `target` recorded by a depth-first
/// search.
///
/// The search pops vertices from a stack and pushes each unvisited
/// neighbour in ascending index order. Pushing `target` ends the scan of the
/// current vertex, but the search keeps draining the stack. Once `target` is
/// visited its parent link never changes, so the result is the first
/// discovery path. It is a valid path but not necessarily the shortest one;
/// use [`super::bfs_shortest_path`] for that.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] when `source` or `target`
/// is not a vertex of `graph`.
///
/// # Examples
/// ```
/// use graphwalk_core::{Graph, dfs_path};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(0, 3)?;
/// graph.add_edge(1, 2)?;
/// let path = dfs_path(&graph, 0, 2)?;
/// assert_eq!(path.vertices(), &[0, 1, 2]);
/// # Ok::<(), graphwalk_core::GraphError>(())
/// ```
#[instrument(
    name = "core.dfs",
    level = "debug",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), visited = field::Empty, hops = field::Empty),
)]
pub fn dfs_path(graph: &Graph, source: VertexId, target: VertexId) -> Result<VertexPath> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;

    let matrix = graph.adjacency_matrix();
    let mut state = SearchState::new(graph.vertex_count(), source);
    let mut stack = vec![source];

    while let Some(vertex) = stack.pop() {
        for next in successors(matrix.row(vertex)?) {
            if state.discover(vertex, next) {
                stack.push(next);
                if next == target {
                    break;
                }
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
