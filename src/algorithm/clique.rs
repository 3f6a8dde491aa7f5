//! Maximal clique enumeration (Bron–Kerbosch with pivoting)
//!
//! Vertices are mapped to dense indices once, neighbourhoods are stored as
//! [`VertexBitset`]s, and the recursion is unrolled into an explicit stack
//! of frames. Each frame owns its own clique, candidate and excluded sets,
//! so no set is shared between branches.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, warn};

use crate::algorithm::bitset::VertexBitset;
use crate::common::configuration::DEFAULT_CLIQUE_EXPANSION_LIMIT;
use crate::common::error::{
    AlgorithmError, Result, budget_exhausted, invalid_parameter, unknown_vertex,
};

/// Undirected graph without self loops, keyed by opaque vertex identifiers
///
/// Symmetry of the adjacency relation is guaranteed by construction.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    vertices: Vec<V>,
    indices: HashMap<V, usize>,
    neighbours: Vec<VertexBitset>,
}

impl<V> AdjacencyGraph<V>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    /// Build a graph from undirected edges
    ///
    /// Every edge is recorded in both directions. Self loops are dropped and
    /// duplicate edges collapse.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut adjacency: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
        for (first, second) in edges {
            if first == second {
                adjacency.entry(first).or_default();
                continue;
            }
            adjacency
                .entry(first.clone())
                .or_default()
                .insert(second.clone());
            adjacency.entry(second).or_default().insert(first);
        }
        Self::from_sorted(adjacency)
    }

    /// Build a graph from an explicit adjacency map
    ///
    /// # Errors
    ///
    /// - `UnknownVertex` if a neighbour is not itself a key of the map
    /// - `AsymmetricAdjacency` if `u` lists `v` but `v` does not list `u`
    /// - `InvalidParameter` if a vertex lists itself
    pub fn from_adjacency(adjacency: &HashMap<V, HashSet<V>>) -> Result<Self> {
        let mut sorted: BTreeMap<V, BTreeSet<V>> = BTreeMap::new();
        for (vertex, neighbours) in adjacency {
            for neighbour in neighbours {
                if neighbour == vertex {
                    return Err(invalid_parameter(
                        "adjacency",
                        &format!("{vertex:?}"),
                        &"vertex lists itself as a neighbour",
                    ));
                }
                let reverse = adjacency
                    .get(neighbour)
                    .ok_or_else(|| unknown_vertex(neighbour))?;
                if !reverse.contains(vertex) {
                    return Err(AlgorithmError::AsymmetricAdjacency {
                        vertex: format!("{vertex:?}"),
                        neighbour: format!("{neighbour:?}"),
                    });
                }
            }
            sorted.insert(vertex.clone(), neighbours.iter().cloned().collect());
        }
        Ok(Self::from_sorted(sorted))
    }

    fn from_sorted(adjacency: BTreeMap<V, BTreeSet<V>>) -> Self {
        let vertices: Vec<V> = adjacency.keys().cloned().collect();
        let indices: HashMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (vertex.clone(), index))
            .collect();

        let neighbours = adjacency
            .values()
            .map(|adjacent| {
                let mut bits = VertexBitset::new(vertices.len());
                for neighbour in adjacent {
                    if let Some(&index) = indices.get(neighbour) {
                        bits.insert(index);
                    }
                }
                bits
            })
            .collect();

        Self {
            vertices,
            indices,
            neighbours,
        }
    }

    /// Vertices in ascending order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(VertexBitset::count).sum::<usize>() / 2
    }

    /// Whether the graph contains `vertex`
    pub fn contains(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    /// Neighbours of `vertex` in ascending order, `None` for unknown vertices
    pub fn neighbours(&self, vertex: &V) -> Option<Vec<&V>> {
        let bits = self.neighbour_bits(*self.indices.get(vertex)?)?;
        Some(bits.iter().filter_map(|index| self.vertices.get(index)).collect())
    }

    /// Whether an edge joins `first` and `second`
    pub fn are_adjacent(&self, first: &V, second: &V) -> bool {
        match (self.indices.get(first), self.indices.get(second)) {
            (Some(&a), Some(&b)) => self.neighbour_bits(a).is_some_and(|bits| bits.contains(b)),
            _ => false,
        }
    }

    /// Whether every pair of `members` is joined by an edge
    pub fn is_clique(&self, members: &BTreeSet<V>) -> bool {
        members.iter().all(|vertex| self.contains(vertex))
            && members.iter().enumerate().all(|(position, first)| {
                members
                    .iter()
                    .skip(position + 1)
                    .all(|second| self.are_adjacent(first, second))
            })
    }

    /// Whether `members` is a clique that no outside vertex extends
    pub fn is_maximal_clique(&self, members: &BTreeSet<V>) -> bool {
        self.is_clique(members)
            && self
                .vertices
                .iter()
                .filter(|vertex| !members.contains(vertex))
                .all(|outside| {
                    members
                        .iter()
                        .any(|member| !self.are_adjacent(outside, member))
                })
    }

    fn neighbour_bits(&self, index: usize) -> Option<&VertexBitset> {
        self.neighbours.get(index)
    }

    fn index_set<'a, I>(&self, vertices: I) -> Result<VertexBitset>
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut bits = VertexBitset::new(self.vertices.len());
        for vertex in vertices {
            let index = self
                .indices
                .get(vertex)
                .ok_or_else(|| unknown_vertex(vertex))?;
            bits.insert(*index);
        }
        Ok(bits)
    }
}

/// One pending call of the recursion: clique so far, candidates, excluded
struct Frame {
    clique: Vec<usize>,
    candidates: VertexBitset,
    excluded: VertexBitset,
}

/// Enumerate every maximal clique of `graph`, largest first
///
/// Uses [`DEFAULT_CLIQUE_EXPANSION_LIMIT`] as the exploration budget.
///
/// # Errors
///
/// Returns `BudgetExhausted` if the enumeration expands more frames than
/// the default budget allows.
pub fn bron_kerbosch<V>(graph: &AdjacencyGraph<V>) -> Result<Vec<BTreeSet<V>>>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    bron_kerbosch_with_limit(graph, DEFAULT_CLIQUE_EXPANSION_LIMIT)
}

/// Enumerate every maximal clique of `graph` with an explicit budget
///
/// # Errors
///
/// Returns `BudgetExhausted` once more than `limit` frames were expanded.
pub fn bron_kerbosch_with_limit<V>(
    graph: &AdjacencyGraph<V>,
    limit: usize,
) -> Result<Vec<BTreeSet<V>>>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let seed = Frame {
        clique: Vec::new(),
        candidates: VertexBitset::all(graph.vertex_count()),
        excluded: VertexBitset::new(graph.vertex_count()),
    };
    enumerate(graph, seed, limit)
}

/// Enumerate the maximal cliques that extend `clique` using `candidates`
///
/// This is the classic three-set entry point: `clique` (R) is the clique
/// built so far, `candidates` (P) the vertices that may still join it and
/// `excluded` (X) the vertices whose cliques were already reported.
/// Calling it with `R = ∅`, `P = all vertices`, `X = ∅` is equivalent to
/// [`bron_kerbosch`].
///
/// # Errors
///
/// - `UnknownVertex` if any of the three sets names a vertex missing from
///   the graph
/// - `BudgetExhausted` if the default expansion budget runs out
pub fn bron_kerbosch_from<V>(
    clique: &HashSet<V>,
    candidates: &HashSet<V>,
    excluded: &HashSet<V>,
    graph: &AdjacencyGraph<V>,
) -> Result<Vec<BTreeSet<V>>>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let seed = Frame {
        clique: graph.index_set(clique)?.to_vec(),
        candidates: graph.index_set(candidates)?,
        excluded: graph.index_set(excluded)?,
    };
    enumerate(graph, seed, DEFAULT_CLIQUE_EXPANSION_LIMIT)
}

/// The largest clique of `graph`, `None` only when the graph has no vertices
///
/// Ties are broken by the lexicographically smallest vertex set.
///
/// # Errors
///
/// Propagates `BudgetExhausted` from the enumeration.
pub fn maximum_clique<V>(graph: &AdjacencyGraph<V>) -> Result<Option<BTreeSet<V>>>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let cliques = bron_kerbosch(graph)?;
    Ok(cliques.into_iter().next().filter(|clique| !clique.is_empty()))
}

fn enumerate<V>(graph: &AdjacencyGraph<V>, seed: Frame, limit: usize) -> Result<Vec<BTreeSet<V>>>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let mut found: Vec<Vec<usize>> = Vec::new();
    let mut stack = vec![seed];
    let mut expansions = 0usize;

    while let Some(frame) = stack.pop() {
        expansions += 1;
        if expansions > limit {
            warn!(limit, found = found.len(), "clique enumeration budget exhausted");
            return Err(budget_exhausted("bron_kerbosch", limit));
        }

        let Frame {
            clique,
            mut candidates,
            mut excluded,
        } = frame;

        if candidates.is_empty() && excluded.is_empty() {
            found.push(clique);
            continue;
        }

        // Branching on P \ N(pivot) skips cliques the pivot's branch will report
        let branches = match choose_pivot(graph, &candidates, &excluded) {
            Some(pivot) => candidates.difference(pivot),
            None => candidates.clone(),
        };

        for vertex in branches.iter() {
            let Some(adjacent) = graph.neighbour_bits(vertex) else {
                continue;
            };
            let mut extended = clique.clone();
            extended.push(vertex);
            stack.push(Frame {
                clique: extended,
                candidates: candidates.intersection(adjacent),
                excluded: excluded.intersection(adjacent),
            });
            candidates.remove(vertex);
            excluded.insert(vertex);
        }
    }

    let mut cliques: Vec<BTreeSet<V>> = found
        .into_iter()
        .map(|members| {
            members
                .into_iter()
                .filter_map(|index| graph.vertices.get(index).cloned())
                .collect()
        })
        .collect();
    cliques.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    debug!(
        vertices = graph.vertex_count(),
        cliques = cliques.len(),
        largest = cliques.first().map_or(0, BTreeSet::len),
        expansions,
        "enumerated maximal cliques"
    );
    Ok(cliques)
}

/// Neighbourhood of the vertex in P ∪ X with the most neighbours in P
fn choose_pivot<'g, V>(
    graph: &'g AdjacencyGraph<V>,
    candidates: &VertexBitset,
    excluded: &VertexBitset,
) -> Option<&'g VertexBitset> {
    candidates
        .union(excluded)
        .iter()
        .filter_map(|vertex| graph.neighbours.get(vertex))
        .max_by_key(|adjacent| adjacent.intersection(candidates).count())
}
