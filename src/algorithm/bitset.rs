use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over dense vertex indices
///
/// Backs the candidate and excluded sets of the clique enumerator, where
/// intersections with neighbourhoods dominate the running time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexBitset {
    bits: BitVec,
}

impl VertexBitset {
    /// Create a bitset with no vertices present
    pub fn new(vertex_count: usize) -> Self {
        Self {
            bits: bitvec![0; vertex_count],
        }
    }

    /// Create a bitset containing every vertex
    pub fn all(vertex_count: usize) -> Self {
        Self {
            bits: bitvec![1; vertex_count],
        }
    }

    /// Insert a vertex index, ignoring indices past the capacity
    pub fn insert(&mut self, vertex: usize) {
        if vertex < self.bits.len() {
            self.bits.set(vertex, true);
        }
    }

    /// Remove a vertex index
    pub fn remove(&mut self, vertex: usize) {
        if vertex < self.bits.len() {
            self.bits.set(vertex, false);
        }
    }

    /// Test vertex membership
    pub fn contains(&self, vertex: usize) -> bool {
        self.bits.get(vertex).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Create a new bitset containing the union
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.bits |= &other.bits;
        result
    }

    /// Create a new bitset with every vertex of `other` removed
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for vertex in other.bits.iter_ones() {
            result.remove(vertex);
        }
        result
    }

    /// Test if no vertices are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count vertices in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over the present vertex indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all vertex indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for VertexBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexBitset({} vertices: {:?})", self.count(), self.to_vec())
    }
}
