//! Path finding over the adjacency matrix of a [`Graph`].
//!
//! Two searches are offered. [`bfs_shortest_path`] returns a path with the
//! fewest hops. [`dfs_path`] returns whichever path depth-first discovery
//! records first, which may be longer. Both ignore edge weights, scan
//! neighbours in ascending index order, and report "no path" as an empty
//! [`VertexPath`] rather than an error.

mod bfs;
mod dfs;
mod search;

use std::fmt;

use crate::{
    error::Result,
    graph::{Graph, VertexId},
};

pub use self::{bfs::bfs_shortest_path, dfs::dfs_path};

/// An ordered sequence of vertices from a source to a target.
///
/// An empty path means the target was unreachable.
///
/// # Examples
/// ```
/// use graphwalk_core::{Graph, bfs_shortest_path};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// let path = bfs_shortest_path(&graph, 0, 2)?;
/// assert_eq!(path.vertices(), &[0, 1, 2]);
/// assert_eq!(path.hop_count(), 2);
/// assert_eq!(path.to_string(), "0 -> 1 -> 2");
/// # Ok::<(), graphwalk_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VertexPath(Vec<VertexId>);

impl VertexPath {
    /// Returns the path that signals an unreachable target.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the vertices from source to target.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.0
    }

    /// Returns `true` when no path was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of vertices on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the number of edges traversed.
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Returns the first vertex, if any.
    #[must_use]
    pub fn source(&self) -> Option<VertexId> {
        self.0.first().copied()
    }

    /// Returns the last vertex, if any.
    #[must_use]
    pub fn target(&self) -> Option<VertexId> {
        self.0.last().copied()
    }

    /// Returns `true` when every consecutive pair is joined by an edge of
    /// `graph`. Empty and single-vertex paths are trivially walks.
    #[must_use]
    pub fn is_walk_in(&self, graph: &Graph) -> bool {
        let matrix = graph.adjacency_matrix();
        self.0
            .windows(2)
            .all(|pair| matches!(pair, [from, to] if matrix.has_edge(*from, *to) == Ok(true)))
    }

    /// Consumes the path, returning its vertices.
    #[must_use]
    pub fn into_vec(self) -> Vec<VertexId> {
        self.0
    }
}

impl From<VertexPath> for Vec<VertexId> {
    fn from(path: VertexPath) -> Self {
        path.0
    }
}

impl AsRef<[VertexId]> for VertexPath {
    fn as_ref(&self) -> &[VertexId] {
        &self.0
    }
}

impl fmt::Display for VertexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices = self.0.iter();
        if let Some(first) = vertices.next() {
            write!(f, "{first}")?;
        }
        for vertex in vertices {
            write!(f, " -> {vertex}")?;
        }
        Ok(())
    }
}

/// Selects which search [`find_path`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathStrategy {
    /// Breadth-first search; the result has the fewest hops.
    BreadthFirst,
    /// Depth-first search; the result is some path, not necessarily the
    /// shortest.
    DepthFirst,
}

impl PathStrategy {
    /// Every strategy, in the order reports list them.
    pub const ALL: [Self; 2] = [Self::BreadthFirst, Self::DepthFirst];

    /// Returns the short uppercase label used in logs and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }
}

/// Finds a path from `source` to `target` with the chosen strategy.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] when `source` or `target`
/// is not a vertex of `graph`.
///
/// # Examples
/// ```
/// use graphwalk_core::{Graph, PathStrategy, find_path};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1)?;
/// for strategy in PathStrategy::ALL {
///     assert!(find_path(&graph, 0, 2, strategy)?.is_empty());
/// }
/// # Ok::<(), graphwalk_core::GraphError>(())
/// ```
pub fn find_path(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
    strategy: PathStrategy,
) -> Result<VertexPath> {
    match strategy {
        PathStrategy::BreadthFirst => bfs_shortest_path(graph, source, target),
        PathStrategy::DepthFirst => dfs_path(graph, source, target),
    }
}


#[cfg(test)]
mod property;
