//! The [`Graph`] data structure and the representations derived from it.
//!
//! A graph owns its vertex count and orientation, both fixed at
//! construction. Every insertion updates the adjacency matrix, the adjacency
//! list, and the edge list together. The incidence matrix is built on first
//! request and cached until the next insertion.

mod list;
mod matrix;

use std::cell::OnceCell;

use tracing::debug;

use crate::error::{GraphError, Result};

pub use self::{
    list::{AdjacencyList, Edge, Neighbour},
    matrix::{AdjacencyMatrix, IncidenceMatrix},
};

/// Index of a vertex, in `0..vertex_count`.
pub type VertexId = usize;

/// Edge weight. Zero is reserved to mean "no edge".
pub type Weight = u32;

/// Whether edges are one-way or two-way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Each edge connects both endpoints symmetrically.
    #[default]
    Undirected,
    /// Each edge runs from its source to its target only.
    Directed,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Directed`].
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// A finite weighted graph over vertices `0..vertex_count`.
///
/// # Examples
/// ```
/// use graphwalk_core::{Graph, Orientation};
///
/// let mut graph = Graph::new(4);
/// graph.add_weighted_edge(0, 1, 5)?;
/// graph.add_edge(1, 2)?;
/// assert_eq!(graph.orientation(), Orientation::Undirected);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.adjacency_matrix().weight(2, 1)?, 1);
/// # Ok::<(), graphwalk_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    vertex_count: usize,
    orientation: Orientation,
    adjacency_matrix: AdjacencyMatrix,
    adjacency_list: AdjacencyList,
    edges: Vec<Edge>,
    incidence: OnceCell<IncidenceMatrix>,
}

impl Graph {
    /// Creates an undirected graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self::with_orientation(vertex_count, Orientation::Undirected)
    }

    /// Creates a directed graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn directed(vertex_count: usize) -> Self {
        Self::with_orientation(vertex_count, Orientation::Directed)
    }

    /// Creates a graph with `vertex_count` isolated vertices and the given
    /// orientation.
    #[must_use]
    pub fn with_orientation(vertex_count: usize, orientation: Orientation) -> Self {
        Self {
            vertex_count,
            orientation,
            adjacency_matrix: AdjacencyMatrix::zeroed(vertex_count),
            adjacency_list: AdjacencyList::empty(vertex_count),
            edges: Vec::new(),
            incidence: OnceCell::new(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of inserted edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the orientation chosen at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn orientation(&self) -> Orientation { self.orientation }

    /// Returns `true` when the graph is directed.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.orientation.is_directed()
    }

    /// Adds an edge of weight `1` between `from` and `to`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.add_weighted_edge(from, to, 1)
    }

    /// Adds an edge of the given weight between `from` and `to`.
    ///
    /// The matrix cell is overwritten, so a repeated pair keeps the latest
    /// weight while the list and edge sequence record every insertion.
    /// Duplicates and self-loops are not rejected. Undirected graphs also
    /// write the mirrored matrix cell.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph and [`GraphError::ZeroWeight`] when `weight` is
    /// zero. The graph is unchanged on error.
    pub fn add_weighted_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight == 0 {
            return Err(GraphError::ZeroWeight { from, to });
        }

        self.adjacency_matrix.set(from, to, weight)?;
        if !self.is_directed() {
            self.adjacency_matrix.set(to, from, weight)?;
        }
        self.adjacency_list.push(from, Neighbour::new(to, weight))?;
        self.edges.push(Edge::new(from, to));
        self.incidence = OnceCell::new();
        Ok(())
    }

    /// Returns the adjacency matrix.
    #[must_use]
    #[rustfmt::skip]
    pub const fn adjacency_matrix(&self) -> &AdjacencyMatrix { &self.adjacency_matrix }

    /// Returns the adjacency list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn adjacency_list(&self) -> &AdjacencyList { &self.adjacency_list }

    /// Returns the edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the incidence matrix, building it if no cached copy exists.
    ///
    /// The cache is discarded by every insertion, so the result always
    /// reflects the current edge list.
    ///
    /// # Examples
    /// ```
    /// use graphwalk_core::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// graph.add_weighted_edge(0, 1, 2)?;
    /// assert_eq!(graph.incidence_matrix().edge_count(), 1);
    /// graph.add_weighted_edge(1, 2, 3)?;
    /// assert_eq!(graph.incidence_matrix().column(1)?, vec![0, 3, 3]);
    /// # Ok::<(), graphwalk_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn incidence_matrix(&self) -> &IncidenceMatrix {
        self.incidence.get_or_init(|| {
            debug!(
                vertices = self.vertex_count,
                edges = self.edges.len(),
                "building incidence matrix"
            );
            IncidenceMatrix::build(
                self.vertex_count,
                &self.edges,
                &self.adjacency_matrix,
                self.orientation,
            )
        })
    }

    /// Validates that `vertex` belongs to the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when it does not.
    pub const fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}
