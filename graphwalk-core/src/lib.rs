//! Graphwalk core library.
//!
//! Provides a weighted [`Graph`] kept in sync across adjacency matrix,
//! adjacency list, and incidence matrix forms, a [`RandomGraphGenerator`]
//! that builds graphs under edge-count and degree constraints, and
//! breadth- and depth-first path finding.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod graph;
mod path;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode, Result},
    generator::{GeneratorParams, MAX_WEIGHT, MIN_WEIGHT, RandomGraphGenerator},
    graph::{
        AdjacencyList, AdjacencyMatrix, Edge, Graph, IncidenceMatrix, Neighbour, Orientation,
        VertexId, Weight,
    },
    path::{PathStrategy, VertexPath, bfs_shortest_path, dfs_path, find_path},
};
