//! Error types shared by the search, clique and containment routines

use std::fmt;

/// Main error type for all algorithm operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The search frontier emptied before the target was dequeued
    Unreachable {
        /// Number of points that received a recorded distance
        explored: usize,
    },

    /// An exploration budget ran out before the routine finished
    ///
    /// Raised by the clique enumerator and the flood fill, both of which
    /// can grow without bound on malformed input.
    BudgetExhausted {
        /// Name of the routine that stopped
        operation: &'static str,
        /// Budget that was exceeded
        limit: usize,
    },

    /// A vertex was referenced that the graph does not contain
    UnknownVertex {
        /// Debug rendering of the vertex identifier
        vertex: String,
    },

    /// Adjacency map lists an edge in one direction only
    AsymmetricAdjacency {
        /// Vertex whose neighbour set contains `neighbour`
        vertex: String,
        /// Neighbour that does not list `vertex` back
        neighbour: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { explored } => {
                write!(
                    f,
                    "Target is unreachable ({explored} points explored before the frontier emptied)"
                )
            }
            Self::BudgetExhausted { operation, limit } => {
                write!(f, "Budget of {limit} exhausted during {operation}")
            }
            Self::UnknownVertex { vertex } => {
                write!(f, "Vertex {vertex} is not part of the graph")
            }
            Self::AsymmetricAdjacency { vertex, neighbour } => {
                write!(
                    f,
                    "Adjacency is not symmetric: {vertex} lists {neighbour} but not the reverse"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a budget exhaustion error
pub const fn budget_exhausted(operation: &'static str, limit: usize) -> AlgorithmError {
    AlgorithmError::BudgetExhausted { operation, limit }
}

/// Create an unknown vertex error from any debuggable identifier
pub fn unknown_vertex(vertex: &impl fmt::Debug) -> AlgorithmError {
    AlgorithmError::UnknownVertex {
        vertex: format!("{vertex:?}"),
    }
}
