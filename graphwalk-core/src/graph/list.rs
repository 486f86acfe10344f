//! Sparse representations kept alongside the adjacency matrix.

use crate::error::{GraphError, Result};

use super::{VertexId, Weight};

/// An inserted edge, recorded as `(source, target)` without its weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
}

impl Edge {
    pub(crate) const fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// Returns the vertex the edge was inserted from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the vertex the edge was inserted to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }
}

impl From<Edge> for (VertexId, VertexId) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

/// One entry of an adjacency list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbour {
    vertex: VertexId,
    weight: Weight,
}

impl Neighbour {
    pub(crate) const fn new(vertex: VertexId, weight: Weight) -> Self {
        Self { vertex, weight }
    }

    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// Per-vertex neighbour lists in insertion order.
///
/// Only the source vertex of an insertion receives an entry, so for
/// undirected graphs an edge appears once rather than under both endpoints.
///
/// # Examples
/// ```
/// use graphwalk_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_weighted_edge(0, 2, 5)?;
/// graph.add_edge(0, 1)?;
/// let neighbours: Vec<_> = graph
///     .adjacency_list()
///     .neighbours(0)?
///     .iter()
///     .map(|n| (n.vertex(), n.weight()))
///     .collect();
/// assert_eq!(neighbours, vec![(2, 5), (1, 1)]);
/// assert!(graph.adjacency_list().neighbours(2)?.is_empty());
/// # Ok::<(), graphwalk_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyList {
    entries: Vec<Vec<Neighbour>>,
}

impl AdjacencyList {
    pub(crate) fn empty(vertex_count: usize) -> Self {
        Self {
            entries: vec![Vec::new(); vertex_count],
        }
    }

    /// Returns the number of vertices covered by the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` for a graph without vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the neighbours recorded for `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex
    /// of the graph.
    pub fn neighbours(&self, vertex: VertexId) -> Result<&[Neighbour]> {
        self.entries
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.entries.len(),
            })
    }

    /// Iterates over `(vertex, neighbours)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[Neighbour])> {
        self.entries
            .iter()
            .enumerate()
            .map(|(vertex, neighbours)| (vertex, neighbours.as_slice()))
    }

    pub(crate) fn push(&mut self, vertex: VertexId, neighbour: Neighbour) -> Result<()> {
        let vertex_count = self.entries.len();
        self.entries
            .get_mut(vertex)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            })?
            .push(neighbour);
        Ok(())
    }
}
