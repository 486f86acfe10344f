//! Error types for the graphwalk core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building, indexing, or searching a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index was outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge index was outside `0..edge_count`.
    #[error("edge {edge} is out of range for a graph with {edge_count} edges")]
    EdgeOutOfRange {
        /// The offending edge index.
        edge: usize,
        /// Number of edges in the graph.
        edge_count: usize,
    },
    /// Zero is reserved for "no edge" in the adjacency matrix.
    #[error("edge ({from}, {to}) must have a non-zero weight")]
    ZeroWeight {
        /// Tail of the rejected edge.
        from: VertexId,
        /// Head of the rejected edge.
        to: VertexId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index was outside `0..vertex_count`.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge index was outside `0..edge_count`.
        EdgeOutOfRange => EdgeOutOfRange { .. } => "GRAPH_EDGE_OUT_OF_RANGE",
        /// An edge was given a zero weight.
        ZeroWeight => ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
    }
}

/// Error type produced by [`crate::RandomGraphGenerator`] and
/// [`crate::GeneratorParams`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// The parameter set is self-contradictory.
    #[error("invalid generator parameter: {reason}")]
    InvalidParameters {
        /// Human-readable description of the violated constraint.
        reason: String,
    },
    /// The requested edge count cannot be placed under the degree caps.
    #[error(
        "cannot place {target} edges under the configured constraints \
         (placed {placed} after {attempts} attempts)"
    )]
    InfeasibleConstraints {
        /// Number of edges the generator was asked to place.
        target: usize,
        /// Most edges placed by any round before giving up.
        placed: usize,
        /// Candidate pairs drawn across every round.
        attempts: u64,
    },
    /// Inserting a generated edge failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// The parameter set is self-contradictory.
        InvalidParameters => InvalidParameters { .. } => "GENERATOR_INVALID_PARAMETERS",
        /// The requested edge count cannot be placed.
        InfeasibleConstraints => InfeasibleConstraints { .. } => "GENERATOR_INFEASIBLE_CONSTRAINTS",
        /// Inserting a generated edge failed.
        GraphFailure => Graph(..) => "GENERATOR_GRAPH_FAILURE",
    }
}

impl GeneratorError {
    /// Retrieve the inner [`GraphErrorCode`] when the failure came from the
    /// graph itself.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
