//! Classical graph and geometry algorithms for coordinate grids
//!
//! Grid inputs become sets of points; the crate searches them for shortest
//! paths under pluggable cost functions, fills polygon interiors, and
//! enumerates the maximal cliques of small undirected graphs.

#![forbid(unsafe_code)]

/// Shortest paths, clique enumeration, polygon containment and flood fill
pub mod algorithm;
/// Error type and algorithm constants
pub mod common;
/// Integer utilities
pub mod math;
/// Points, point factories and character grids
pub mod spatial;

pub use common::error::{AlgorithmError, Result};
