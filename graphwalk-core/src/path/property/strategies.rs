//! Graph fixtures for the path-finding properties.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

use crate::graph::{Graph, Orientation};

const MAX_VERTICES: usize = 16;

/// Overall layout of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Each pair is joined with low probability.
    #[weight(3)]
    Sparse,
    /// Most pairs are joined.
    #[weight(1)]
    Dense,
    /// Two halves with no edges between them.
    #[weight(2)]
    Split,
    /// A single path through the vertices in a shuffled order, plus a few
    /// shortcuts.
    #[weight(2)]
    Chain,
}

/// Orientation chosen by the strategy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Direction {
    Undirected,
    Directed,
}

impl From<Direction> for Orientation {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Undirected => Self::Undirected,
            Direction::Directed => Self::Directed,
        }
    }
}

/// A graph together with a query pair.
#[derive(Clone, Debug)]
pub(super) struct PathFixture {
    pub shape: GraphShape,
    pub graph: Graph,
    pub source: usize,
    pub target: usize,
}

pub(super) fn path_fixture_strategy() -> impl Strategy<Value = PathFixture> {
    (any::<GraphShape>(), any::<Direction>(), any::<u64>()).prop_map(|(shape, direction, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, direction.into(), &mut rng)
    })
}

pub(super) fn generate_fixture(
    shape: GraphShape,
    orientation: Orientation,
    rng: &mut SmallRng,
) -> PathFixture {
    let vertex_count = rng.gen_range(1..=MAX_VERTICES);
    let mut graph = Graph::with_orientation(vertex_count, orientation);
    match shape {
        GraphShape::Sparse => join_pairs(&mut graph, rng, 0.15, |_, _| true),
        GraphShape::Dense => join_pairs(&mut graph, rng, 0.8, |_, _| true),
        GraphShape::Split => {
            let half = vertex_count / 2;
            join_pairs(&mut graph, rng, 0.4, |from, to| (from < half) == (to < half));
        }
        GraphShape::Chain => build_chain(&mut graph, rng),
    }
    let source = rng.gen_range(0..vertex_count);
    let target = rng.gen_range(0..vertex_count);
    PathFixture {
        shape,
        graph,
        source,
        target,
    }
}

fn join_pairs(
    graph: &mut Graph,
    rng: &mut SmallRng,
    probability: f64,
    allowed: impl Fn(usize, usize) -> bool,
) {
    let vertex_count = graph.vertex_count();
    for from in 0..vertex_count {
        for to in 0..vertex_count {
            let candidate = if graph.is_directed() {
                from != to
            } else {
                from < to
            };
            if candidate && allowed(from, to) && rng.gen_bool(probability) {
                add(graph, rng, from, to);
            }
        }
    }
}

fn build_chain(graph: &mut Graph, rng: &mut SmallRng) {
    let vertex_count = graph.vertex_count();
    let mut order: Vec<usize> = (0..vertex_count).collect();
    for i in (1..vertex_count).rev() {
        order.swap(i, rng.gen_range(0..=i));
    }
    for pair in order.windows(2) {
        if let [from, to] = pair {
            add(graph, rng, *from, *to);
        }
    }
    for _ in 0..vertex_count / 4 {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        if from != to {
            add(graph, rng, from, to);
        }
    }
}

fn add(graph: &mut Graph, rng: &mut SmallRng, from: usize, to: usize) {
    let weight = rng.gen_range(1..=100);
    if let Err(err) = graph.add_weighted_edge(from, to, weight) {
        panic!("fixture edge ({from}, {to}) rejected: {err}");
    }
}
