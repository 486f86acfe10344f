//! Dense matrix representations derived from a [`super::Graph`].

use crate::error::{GraphError, Result};

use super::{Edge, Orientation, VertexId, Weight};

/// Square `vertex × vertex` grid of edge weights, stored row-major.
///
/// A cell holding `0` means "no edge". Undirected graphs keep the matrix
/// symmetric; directed graphs make no such promise.
///
/// # Examples
/// ```
/// use graphwalk_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_weighted_edge(0, 2, 7)?;
/// let matrix = graph.adjacency_matrix();
/// assert_eq!(matrix.weight(0, 2)?, 7);
/// assert_eq!(matrix.weight(2, 0)?, 7);
/// assert_eq!(matrix.weight(1, 2)?, 0);
/// # Ok::<(), graphwalk_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    order: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    pub(crate) fn zeroed(order: usize) -> Self {
        Self {
            order,
            cells: vec![0; order * order],
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub const fn order(&self) -> usize { self.order }

    /// Returns the weight stored for `(from, to)`, or `0` when absent.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either index is not a
    /// vertex of the graph.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight> {
        let index = self.cell_index(from, to)?;
        Ok(self.cells[index])
    }

    /// Returns `true` when a non-zero weight is stored for `(from, to)`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either index is not a
    /// vertex of the graph.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        self.weight(from, to).map(|weight| weight != 0)
    }

    /// Returns the outgoing weights of `vertex`, indexed by target.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex
    /// of the graph.
    pub fn row(&self, vertex: VertexId) -> Result<&[Weight]> {
        self.check(vertex)?;
        let start = vertex * self.order;
        Ok(&self.cells[start..start + self.order])
    }

    /// Iterates over the rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // `max(1)` keeps `chunks_exact` valid for the empty matrix.
        self.cells.chunks_exact(self.order.max(1))
    }

    // Callers guarantee both indices were validated on insertion.
    pub(crate) fn stored(&self, from: VertexId, to: VertexId) -> Weight {
        self.cells[from * self.order + to]
    }

    pub(crate) fn set(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        let index = self.cell_index(from, to)?;
        self.cells[index] = weight;
        Ok(())
    }

    fn cell_index(&self, from: VertexId, to: VertexId) -> Result<usize> {
        self.check(from)?;
        self.check(to)?;
        Ok(from * self.order + to)
    }

    fn check(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.order {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.order,
            })
        }
    }
}

/// `vertex × edge` grid of signed weights.
///
/// Column `i` describes the `i`-th inserted edge `(u, v)` with weight `w`:
/// row `u` holds `w` and row `v` holds `w` for undirected graphs or `-w` for
/// directed ones. Every other cell in the column is `0`.
///
/// # Examples
/// ```
/// use graphwalk_core::Graph;
///
/// let mut graph = Graph::directed(2);
/// graph.add_weighted_edge(0, 1, 4)?;
/// let incidence = graph.incidence_matrix();
/// assert_eq!(incidence.column(0)?, vec![4, -4]);
/// # Ok::<(), graphwalk_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidenceMatrix {
    vertex_count: usize,
    edge_count: usize,
    cells: Vec<i64>,
}

impl IncidenceMatrix {
    pub(crate) fn build(
        vertex_count: usize,
        edges: &[Edge],
        adjacency: &AdjacencyMatrix,
        orientation: Orientation,
    ) -> Self {
        let edge_count = edges.len();
        let mut cells = vec![0_i64; vertex_count * edge_count];
        for (column, edge) in edges.iter().enumerate() {
            let weight = i64::from(adjacency.stored(edge.source(), edge.target()));
            cells[edge.source() * edge_count + column] = weight;
            // For a self-loop this overwrites the source cell.
            cells[edge.target() * edge_count + column] = match orientation {
                Orientation::Directed => -weight,
                Orientation::Undirected => weight,
            };
        }
        Self {
            vertex_count,
            edge_count,
            cells,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the signed weight recorded for `vertex` in column `edge`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] or
    /// [`GraphError::EdgeOutOfRange`] for indices outside the matrix.
    pub fn entry(&self, vertex: VertexId, edge: usize) -> Result<i64> {
        let row = self.row(vertex)?;
        row.get(edge).copied().ok_or(GraphError::EdgeOutOfRange {
            edge,
            edge_count: self.edge_count,
        })
    }

    /// Returns the row of `vertex`, one cell per edge.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex
    /// of the graph.
    pub fn row(&self, vertex: VertexId) -> Result<&[i64]> {
        if vertex >= self.vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        let start = vertex * self.edge_count;
        Ok(&self.cells[start..start + self.edge_count])
    }

    /// Returns column `edge`, one cell per vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfRange`] when `edge` is not an edge
    /// index of the graph.
    pub fn column(&self, edge: usize) -> Result<Vec<i64>> {
        if edge >= self.edge_count {
            return Err(GraphError::EdgeOutOfRange {
                edge,
                edge_count: self.edge_count,
            });
        }
        Ok(self
            .cells
            .iter()
            .skip(edge)
            .step_by(self.edge_count)
            .copied()
            .collect())
    }

    /// Iterates over the rows in vertex order.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        let width = self.edge_count.max(1);
        self.cells
            .chunks_exact(width)
            .chain(std::iter::repeat_n(&[][..], self.empty_rows()))
    }

    // Rows cannot be recovered from `chunks_exact` when there are no columns.
    const fn empty_rows(&self) -> usize {
        if self.edge_count == 0 {
            self.vertex_count
        } else {
            0
        }
    }
}
