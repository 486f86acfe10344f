//! Random graph generation under degree and edge-count constraints.

mod params;
mod placement;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{error::GeneratorError, graph::Graph};

pub use self::{
    params::GeneratorParams,
    placement::{MAX_WEIGHT, MIN_WEIGHT},
};

/// Builds random [`Graph`] instances that satisfy a [`GeneratorParams`].
///
/// # Examples
/// ```
/// use graphwalk_core::{GeneratorParams, RandomGraphGenerator};
///
/// let params = GeneratorParams::new(10..=10, 10..=10)?.with_rng_seed(42);
/// let mut generator = RandomGraphGenerator::new(params);
/// let graph = generator.generate()?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 10);
/// # Ok::<(), graphwalk_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RandomGraphGenerator {
    params: GeneratorParams,
    rng: SmallRng,
}

impl RandomGraphGenerator {
    /// Creates a generator, seeding its RNG from
    /// [`GeneratorParams::rng_seed`] or from OS entropy when no seed is set.
    #[must_use]
    pub fn new(params: GeneratorParams) -> Self {
        let rng = params
            .rng_seed()
            .map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        Self { params, rng }
    }

    /// Returns the parameters this generator was built with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn params(&self) -> &GeneratorParams { &self.params }

    /// Generates a graph using the generator's own RNG.
    ///
    /// Successive calls continue the same random stream, so a seeded
    /// generator yields a reproducible sequence of graphs.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InfeasibleConstraints`] when the sampled
    /// edge target exceeds what the caps allow, or when every placement
    /// round stalls.
    pub fn generate(&mut self) -> Result<Graph, GeneratorError> {
        placement::generate_graph(&self.params, &mut self.rng)
    }

    /// Generates a graph drawing randomness from `rng`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InfeasibleConstraints`] when the sampled
    /// edge target exceeds what the caps allow, or when every placement
    /// round stalls.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Graph, GeneratorError> {
        placement::generate_graph(&self.params, rng)
    }
}

#[cfg(test)]
mod tests;
