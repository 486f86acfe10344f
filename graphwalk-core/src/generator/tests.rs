//! Unit tests for parameter validation and edge placement.

use rand::{RngCore, SeedableRng, rngs::SmallRng};
use rstest::rstest;

use super::{
    GeneratorParams, MAX_WEIGHT, MIN_WEIGHT, RandomGraphGenerator,
    placement::{DegreeCaps, PLACEMENT_ROUNDS, generate_graph},
};
use crate::{
    error::{GeneratorError, GeneratorErrorCode},
    graph::{Graph, Orientation},
};

/// RNG that only ever yields zero bits, so every uniform draw returns the
/// low end of its range.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        dest.fill(0);
        Ok(())
    }
}

fn degrees(graph: &Graph) -> (Vec<usize>, Vec<usize>) {
    let mut incoming = vec![0; graph.vertex_count()];
    let mut outgoing = vec![0; graph.vertex_count()];
    for edge in graph.edges() {
        outgoing[edge.source()] += 1;
        incoming[edge.target()] += 1;
    }
    (incoming, outgoing)
}

#[rstest]
#[case::vertices(5..=4, 0..=1)]
#[case::edges(1..=4, 3..=2)]
fn params_reject_empty_ranges(
    #[case] vertices: std::ops::RangeInclusive<usize>,
    #[case] edges: std::ops::RangeInclusive<usize>,
) {
    let err = GeneratorParams::new(vertices, edges).expect_err("empty range must be rejected");
    assert_eq!(err.code(), GeneratorErrorCode::InvalidParameters);
}

#[test]
fn default_stall_limit_scales_with_vertex_count() {
    let params = GeneratorParams::new(1..=1, 0..=0).expect("ranges are valid");
    assert_eq!(params.stall_limit_for(2), 1024);
    assert_eq!(params.stall_limit_for(10), 6400);
    assert_eq!(params.with_stall_limit(0).stall_limit_for(10), 1);
}

#[rstest]
#[case::structural(None, 10, 9)]
#[case::tighter(Some(3), 10, 3)]
#[case::looser(Some(50), 10, 9)]
#[case::single_vertex(Some(4), 1, 0)]
fn degree_cap_is_min_of_structural_and_requested(
    #[case] requested: Option<usize>,
    #[case] vertex_count: usize,
    #[case] expected: usize,
) {
    let mut params = GeneratorParams::new(1..=1, 0..=0).expect("ranges are valid");
    if let Some(cap) = requested {
        params = params.with_max_edges_per_vertex(cap);
    }
    assert_eq!(DegreeCaps::resolve(&params, vertex_count).total, expected);
}

#[test]
fn in_and_out_caps_only_apply_to_directed_graphs() {
    let params = GeneratorParams::new(1..=1, 0..=0)
        .expect("ranges are valid")
        .with_max_incoming_edges(1)
        .with_max_outgoing_edges(2);
    let undirected = DegreeCaps::resolve(&params, 5);
    assert_eq!((undirected.incoming, undirected.outgoing), (None, None));

    let directed = DegreeCaps::resolve(&params.with_orientation(Orientation::Directed), 5);
    assert_eq!((directed.incoming, directed.outgoing), (Some(1), Some(2)));
    assert_eq!(directed.edge_bound(5), 5);
}

#[test]
fn target_above_complete_graph_fails_fast() {
    let params = GeneratorParams::new(4..=4, 7..=7)
        .expect("ranges are valid")
        .with_rng_seed(1);
    let err = RandomGraphGenerator::new(params)
        .generate()
        .expect_err("seven edges cannot fit on four vertices");
    assert_eq!(
        err,
        GeneratorError::InfeasibleConstraints {
            target: 7,
            placed: 0,
            attempts: 0
        }
    );
}

#[test]
fn tight_per_vertex_cap_is_honoured_when_checking_feasibility() {
    let params = GeneratorParams::new(6..=6, 4..=4)
        .expect("ranges are valid")
        .with_max_edges_per_vertex(1)
        .with_rng_seed(3);
    let err = RandomGraphGenerator::new(params)
        .generate()
        .expect_err("a matching on six vertices has only three edges");
    assert_eq!(err.code(), GeneratorErrorCode::InfeasibleConstraints);
}

#[test]
fn stalled_placement_gives_up_after_every_round() {
    let params = GeneratorParams::new(10..=10, 5..=5)
        .expect("ranges are valid")
        .with_stall_limit(50);
    let err = generate_graph(&params, &mut ZeroRng).expect_err("only self-loops are drawn");
    assert_eq!(
        err,
        GeneratorError::InfeasibleConstraints {
            target: 5,
            placed: 0,
            attempts: 50 * PLACEMENT_ROUNDS
        }
    );
}

#[test]
fn single_in_and_out_caps_always_complete() {
    // Rounds that corner themselves onto one vertex are restarted.
    let params = GeneratorParams::new(10..=10, 10..=10)
        .expect("ranges are valid")
        .with_orientation(Orientation::Directed)
        .with_max_incoming_edges(1)
        .with_max_outgoing_edges(1);
    let generator = RandomGraphGenerator::new(params);

    for seed in 0..1000 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = generator
            .generate_with(&mut rng)
            .unwrap_or_else(|err| panic!("seed {seed}: {err}"));
        let (incoming, outgoing) = degrees(&graph);
        assert!(incoming.iter().all(|&d| d == 1), "seed {seed}");
        assert!(outgoing.iter().all(|&d| d == 1), "seed {seed}");
    }
}

#[test]
fn zero_vertices_and_zero_edges_yield_an_empty_graph() {
    let params = GeneratorParams::new(0..=0, 0..=0)
        .expect("ranges are valid")
        .with_rng_seed(9);
    let graph = RandomGraphGenerator::new(params)
        .generate()
        .expect("an empty graph is always feasible");
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn complete_graph_target_is_reachable() {
    let params = GeneratorParams::new(6..=6, 15..=15)
        .expect("ranges are valid")
        .with_rng_seed(11);
    let graph = RandomGraphGenerator::new(params)
        .generate()
        .expect("K6 has exactly fifteen edges");
    for from in 0..6 {
        for to in 0..6 {
            let present = graph
                .adjacency_matrix()
                .has_edge(from, to)
                .expect("indices are in range");
            assert_eq!(present, from != to, "({from}, {to})");
        }
    }
}

#[rstest]
#[case::undirected(Orientation::Undirected)]
#[case::directed(Orientation::Directed)]
fn generated_graphs_respect_every_constraint(#[case] orientation: Orientation) {
    let params = GeneratorParams::new(10..=10, 10..=10)
        .expect("ranges are valid")
        .with_orientation(orientation)
        .with_max_edges_per_vertex(10)
        .with_max_incoming_edges(2)
        .with_max_outgoing_edges(2);
    let generator = RandomGraphGenerator::new(params);

    for seed in 0..1000 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = generator
            .generate_with(&mut rng)
            .expect("ten edges always fit under these caps");
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(graph.orientation(), orientation);
        assert!(graph.edges().iter().all(|e| e.source() != e.target()));
        for edge in graph.edges() {
            let weight = graph
                .adjacency_matrix()
                .weight(edge.source(), edge.target())
                .expect("edge endpoints are in range");
            assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&weight));
        }

        let (incoming, outgoing) = degrees(&graph);
        if orientation.is_directed() {
            assert!(incoming.iter().all(|&d| d <= 2), "seed {seed}: {incoming:?}");
            assert!(outgoing.iter().all(|&d| d <= 2), "seed {seed}: {outgoing:?}");
        }
        assert!(
            incoming.iter().zip(&outgoing).all(|(i, o)| i + o <= 9),
            "seed {seed}"
        );
    }
}

#[test]
fn generated_graphs_have_no_parallel_edges() {
    let params = GeneratorParams::new(6..=8, 4..=8)
        .expect("ranges are valid")
        .with_orientation(Orientation::Directed);
    let generator = RandomGraphGenerator::new(params);
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = generator.generate_with(&mut rng).expect("targets fit");
        let mut pairs: Vec<(usize, usize)> =
            graph.edges().iter().copied().map(Into::into).collect();
        pairs.sort_unstable();
        pairs.dedup();
        assert_eq!(pairs.len(), graph.edge_count(), "seed {seed}");
    }
}

#[test]
fn per_vertex_cap_bounds_every_degree() {
    let params = GeneratorParams::new(12..=12, 12..=12)
        .expect("ranges are valid")
        .with_max_edges_per_vertex(3);
    let generator = RandomGraphGenerator::new(params);
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = generator.generate_with(&mut rng).expect("twelve edges fit");
        let (incoming, outgoing) = degrees(&graph);
        assert!(
            incoming.iter().zip(&outgoing).all(|(i, o)| i + o <= 3),
            "seed {seed}"
        );
    }
}

#[test]
fn seeded_generators_are_reproducible() {
    let params = GeneratorParams::new(4..=12, 3..=6)
        .expect("ranges are valid")
        .with_rng_seed(0xC0FFEE);
    let mut left = RandomGraphGenerator::new(params.clone());
    let mut right = RandomGraphGenerator::new(params);
    for _ in 0..5 {
        let a = left.generate().expect("targets fit");
        let b = right.generate().expect("targets fit");
        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.adjacency_matrix(), b.adjacency_matrix());
    }
}
