//! Rejection-sampling edge placement.
//!
//! Candidate pairs are drawn uniformly and accepted only when they respect
//! every degree cap and do not repeat an existing edge in the same
//! direction. A feasibility bound rules out impossible targets up front.
//! Random placement can still corner itself, for example when a directed
//! graph's only free in- and out-capacity sits on one vertex. A round that
//! hits the stall limit is discarded and placement restarts from an empty
//! graph, up to a fixed number of rounds.

use rand::Rng;
use tracing::{Span, debug, field, instrument, warn};

use crate::{
    error::GeneratorError,
    graph::{Graph, Orientation, VertexId, Weight},
};

use super::GeneratorParams;

/// Smallest weight assigned to a generated edge.
pub const MIN_WEIGHT: Weight = 1;
/// Largest weight assigned to a generated edge.
pub const MAX_WEIGHT: Weight = 100;

/// Placement rounds tried from an empty graph before a stalled request is
/// reported as infeasible.
pub(super) const PLACEMENT_ROUNDS: u64 = 64;

/// Degree caps resolved against a concrete vertex count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct DegreeCaps {
    pub(super) total: usize,
    pub(super) incoming: Option<usize>,
    pub(super) outgoing: Option<usize>,
}

impl DegreeCaps {
    pub(super) fn resolve(params: &GeneratorParams, vertex_count: usize) -> Self {
        let structural = vertex_count.saturating_sub(1);
        let total = params
            .max_edges_per_vertex()
            .map_or(structural, |cap| cap.min(structural));
        let (incoming, outgoing) = match params.orientation() {
            Orientation::Directed => (params.max_incoming_edges(), params.max_outgoing_edges()),
            Orientation::Undirected => (None, None),
        };
        Self {
            total,
            incoming,
            outgoing,
        }
    }

    /// Upper bound on the number of edges any placement can reach.
    pub(super) fn edge_bound(&self, vertex_count: usize) -> usize {
        // Every edge consumes one unit of total degree at each endpoint.
        let mut bound = vertex_count.saturating_mul(self.total) / 2;
        if let Some(cap) = self.incoming {
            bound = bound.min(vertex_count.saturating_mul(cap));
        }
        if let Some(cap) = self.outgoing {
            bound = bound.min(vertex_count.saturating_mul(cap));
        }
        bound
    }
}

/// Per-vertex degree counters kept in step with the graph under
/// construction.
struct DegreeBook {
    total: Vec<usize>,
    incoming: Vec<usize>,
    outgoing: Vec<usize>,
}

impl DegreeBook {
    fn new(vertex_count: usize) -> Self {
        Self {
            total: vec![0; vertex_count],
            incoming: vec![0; vertex_count],
            outgoing: vec![0; vertex_count],
        }
    }

    fn accepts(&self, graph: &Graph, caps: DegreeCaps, from: VertexId, to: VertexId) -> bool {
        // Only the `from -> to` cell is checked; the reverse direction is a
        // distinct edge in a directed graph.
        from != to
            && self.total[from] < caps.total
            && self.total[to] < caps.total
            && caps.incoming.is_none_or(|cap| self.incoming[to] < cap)
            && caps.outgoing.is_none_or(|cap| self.outgoing[from] < cap)
            && graph.adjacency_matrix().stored(from, to) == 0
    }

    fn record(&mut self, from: VertexId, to: VertexId) {
        self.total[from] += 1;
        self.total[to] += 1;
        self.outgoing[from] += 1;
        self.incoming[to] += 1;
    }
}

/// Outcome of one placement round.
enum Round {
    Complete(Graph),
    Stalled { placed: usize },
}

/// A sampled request together with the caps that bind it.
struct Plan {
    orientation: Orientation,
    vertex_count: usize,
    target: usize,
    caps: DegreeCaps,
    stall_limit: u64,
}

impl Plan {
    fn place<R: Rng>(&self, rng: &mut R, attempts: &mut u64) -> Result<Round, GeneratorError> {
        let mut graph = Graph::with_orientation(self.vertex_count, self.orientation);
        let mut book = DegreeBook::new(self.vertex_count);
        let mut stalled: u64 = 0;

        while graph.edge_count() < self.target {
            if stalled >= self.stall_limit {
                return Ok(Round::Stalled {
                    placed: graph.edge_count(),
                });
            }

            *attempts += 1;
            let from = rng.gen_range(0..self.vertex_count);
            let to = rng.gen_range(0..self.vertex_count);
            if !book.accepts(&graph, self.caps, from, to) {
                stalled += 1;
                continue;
            }

            let weight = rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT);
            graph.add_weighted_edge(from, to, weight)?;
            book.record(from, to);
            stalled = 0;
        }
        Ok(Round::Complete(graph))
    }
}

#[instrument(
    name = "core.generate",
    err,
    skip(params, rng),
    fields(
        orientation = ?params.orientation(),
        vertices = field::Empty,
        target = field::Empty,
        attempts = field::Empty,
        rounds = field::Empty,
    ),
)]
pub(super) fn generate_graph<R: Rng>(
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<Graph, GeneratorError> {
    let vertex_count = rng.gen_range(params.vertices().clone());
    let target = rng.gen_range(params.edges().clone());
    let span = Span::current();
    span.record("vertices", vertex_count);
    span.record("target", target);

    let caps = DegreeCaps::resolve(params, vertex_count);
    let bound = caps.edge_bound(vertex_count);
    if target > bound {
        warn!(
            requested = target,
            bound,
            "requested edge count exceeds what the caps allow"
        );
        return Err(GeneratorError::InfeasibleConstraints {
            target,
            placed: 0,
            attempts: 0,
        });
    }

    let plan = Plan {
        orientation: params.orientation(),
        vertex_count,
        target,
        caps,
        stall_limit: params.stall_limit_for(vertex_count),
    };
    let mut attempts: u64 = 0;
    let mut most_placed = 0;

    for round in 1..=PLACEMENT_ROUNDS {
        match plan.place(rng, &mut attempts)? {
            Round::Complete(graph) => {
                span.record("attempts", attempts);
                span.record("rounds", round);
                debug!(
                    vertices = vertex_count,
                    edges = graph.edge_count(),
                    attempts,
                    round,
                    "generated graph"
                );
                return Ok(graph);
            }
            Round::Stalled { placed } => {
                debug!(
                    round,
                    placed,
                    requested = target,
                    "edge placement stalled, restarting"
                );
                most_placed = most_placed.max(placed);
            }
        }
    }

    span.record("attempts", attempts);
    span.record("rounds", PLACEMENT_ROUNDS);
    warn!(
        placed = most_placed,
        requested = target,
        stall_limit = plan.stall_limit,
        rounds = PLACEMENT_ROUNDS,
        "edge placement stalled in every round"
    );
    Err(GeneratorError::InfeasibleConstraints {
        target,
        placed: most_placed,
        attempts,
    })
}
