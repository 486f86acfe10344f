//! Parameter handling for the random graph generator.

use std::ops::RangeInclusive;

use crate::{error::GeneratorError, graph::Orientation};

const MIN_STALL_LIMIT: u64 = 1024;
const STALL_LIMIT_PER_CELL: u64 = 64;

/// Constraints for [`crate::RandomGraphGenerator`].
///
/// The vertex and edge counts are drawn uniformly from inclusive ranges. The
/// per-vertex cap bounds the total degree of every vertex and is always
/// tightened to `vertex_count - 1`. The incoming and outgoing caps apply to
/// directed graphs only.
///
/// # Examples
/// ```
/// use graphwalk_core::{GeneratorParams, Orientation};
///
/// let params = GeneratorParams::new(10..=10, 5..=12)?
///     .with_orientation(Orientation::Directed)
///     .with_max_incoming_edges(2)
///     .with_max_outgoing_edges(2)
///     .with_rng_seed(7);
/// assert_eq!(params.vertices(), &(10..=10));
/// assert_eq!(params.max_incoming_edges(), Some(2));
/// # Ok::<(), graphwalk_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorParams {
    vertices: RangeInclusive<usize>,
    edges: RangeInclusive<usize>,
    orientation: Orientation,
    max_edges_per_vertex: Option<usize>,
    max_incoming_edges: Option<usize>,
    max_outgoing_edges: Option<usize>,
    rng_seed: Option<u64>,
    stall_limit: Option<u64>,
}

impl GeneratorParams {
    /// Creates an undirected parameter set with no caps beyond the
    /// structural one.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidParameters`] when either range is
    /// empty.
    pub fn new(
        vertices: RangeInclusive<usize>,
        edges: RangeInclusive<usize>,
    ) -> Result<Self, GeneratorError> {
        if vertices.is_empty() {
            return Err(GeneratorError::InvalidParameters {
                reason: format!(
                    "min_vertices ({}) must not exceed max_vertices ({})",
                    vertices.start(),
                    vertices.end()
                ),
            });
        }
        if edges.is_empty() {
            return Err(GeneratorError::InvalidParameters {
                reason: format!(
                    "min_edges ({}) must not exceed max_edges ({})",
                    edges.start(),
                    edges.end()
                ),
            });
        }
        Ok(Self {
            vertices,
            edges,
            orientation: Orientation::Undirected,
            max_edges_per_vertex: None,
            max_incoming_edges: None,
            max_outgoing_edges: None,
            rng_seed: None,
            stall_limit: None,
        })
    }

    /// Sets whether generated graphs are directed.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Caps the total degree of every vertex.
    #[must_use]
    pub fn with_max_edges_per_vertex(mut self, cap: usize) -> Self {
        self.max_edges_per_vertex = Some(cap);
        self
    }

    /// Caps the in-degree of every vertex in directed graphs.
    #[must_use]
    pub fn with_max_incoming_edges(mut self, cap: usize) -> Self {
        self.max_incoming_edges = Some(cap);
        self
    }

    /// Caps the out-degree of every vertex in directed graphs.
    #[must_use]
    pub fn with_max_outgoing_edges(mut self, cap: usize) -> Self {
        self.max_outgoing_edges = Some(cap);
        self
    }

    /// Seeds the generator's RNG so that output is reproducible.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Overrides how many consecutive rejected candidates end a placement
    /// round and force a restart. Clamped to at least one.
    #[must_use]
    pub fn with_stall_limit(mut self, limit: u64) -> Self {
        self.stall_limit = Some(limit.max(1));
        self
    }

    /// Returns the inclusive vertex-count range.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertices(&self) -> &RangeInclusive<usize> { &self.vertices }

    /// Returns the inclusive edge-count range.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &RangeInclusive<usize> { &self.edges }

    /// Returns the orientation of generated graphs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn orientation(&self) -> Orientation { self.orientation }

    /// Returns the configured total-degree cap, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_edges_per_vertex(&self) -> Option<usize> { self.max_edges_per_vertex }

    /// Returns the configured in-degree cap, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_incoming_edges(&self) -> Option<usize> { self.max_incoming_edges }

    /// Returns the configured out-degree cap, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_outgoing_edges(&self) -> Option<usize> { self.max_outgoing_edges }

    /// Returns the RNG seed, if one was supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rng_seed(&self) -> Option<u64> { self.rng_seed }

    /// Returns the stall limit used for a graph of `vertex_count` vertices.
    ///
    /// Defaults to `max(1024, 64 * vertex_count²)`.
    #[must_use]
    pub fn stall_limit_for(&self, vertex_count: usize) -> u64 {
        self.stall_limit.unwrap_or_else(|| {
            let cells = u64::try_from(vertex_count)
                .unwrap_or(u64::MAX)
                .saturating_mul(u64::try_from(vertex_count).unwrap_or(u64::MAX));
            cells
                .saturating_mul(STALL_LIMIT_PER_CELL)
                .max(MIN_STALL_LIMIT)
        })
    }
}
