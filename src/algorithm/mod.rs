/// Fixed-size bitset over dense vertex indices
pub mod bitset;
/// Bron–Kerbosch maximal clique enumeration
pub mod clique;
/// Generalized Dijkstra search with pluggable cost and neighbour functions
pub mod dijkstra;
/// Turn-penalised search over directional points
pub mod directional;
/// Breadth-first fill of polygon interiors
pub mod flood_fill;
/// Even-odd point-in-polygon classification
pub mod polygon;
