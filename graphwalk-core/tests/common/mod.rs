use graphwalk_core::{Graph, Orientation, VertexId, Weight};

/// Builds a graph from `(from, to, weight)` triples.
#[must_use]
pub fn weighted_graph(
    vertex_count: usize,
    orientation: Orientation,
    edges: &[(VertexId, VertexId, Weight)],
) -> Graph {
    let mut graph = Graph::with_orientation(vertex_count, orientation);
    for &(from, to, weight) in edges {
        graph
            .add_weighted_edge(from, to, weight)
            .expect("fixture edges are valid");
    }
    graph
}

/// The four-vertex graph whose BFS route from 0 to 3 is `[0, 2, 3]`.
#[must_use]
pub fn diamond(orientation: Orientation) -> Graph {
    weighted_graph(
        4,
        orientation,
        &[(0, 1, 5), (1, 2, 3), (0, 2, 1), (2, 3, 4)],
    )
}
