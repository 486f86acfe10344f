//! Visited/parent bookkeeping shared by the breadth- and depth-first
//! searches.

use crate::graph::{VertexId, Weight};

use super::VertexPath;

pub(super) struct SearchState {
    visited: Vec<bool>,
    parent: Vec<Option<VertexId>>,
}

impl SearchState {
    /// Starts a search with only `source` visited. `source` must already be
    /// range-checked.
    pub(super) fn new(vertex_count: usize, source: VertexId) -> Self {
        let mut visited = vec![false; vertex_count];
        visited[source] = true;
        Self {
            visited,
            parent: vec![None; vertex_count],
        }
    }

    /// Marks `next` as reached from `from`. Returns `false`, leaving the
    /// recorded parent untouched, when `next` was already visited.
    pub(super) fn discover(&mut self, from: VertexId, next: VertexId) -> bool {
        if self.visited[next] {
            return false;
        }
        self.visited[next] = true;
        self.parent[next] = Some(from);
        true
    }

    pub(super) fn visited_count(&self) -> usize {
        self.visited.iter().filter(|seen| **seen).count()
    }

    /// Follows parent links back from `target`.
    pub(super) fn path_to(&self, target: VertexId) -> VertexPath {
        if !self.visited[target] {
            return VertexPath::empty();
        }
        let mut vertices = vec![target];
        let mut current = target;
        while let Some(parent) = self.parent[current] {
            vertices.push(parent);
            current = parent;
        }
        vertices.reverse();
        VertexPath(vertices)
    }
}

/// Yields the targets of the non-zero cells of a matrix row in ascending
/// order.
pub(super) fn successors(row: &[Weight]) -> impl Iterator<Item = VertexId> + '_ {
    row.iter()
        .enumerate()
        .filter(|(_, weight)| **weight != 0)
        .map(|(vertex, _)| vertex)
}
