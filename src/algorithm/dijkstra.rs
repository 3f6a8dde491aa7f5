//! Generalized Dijkstra shortest-path search over point graphs
//!
//! The graph is a set of points; adjacency and move cost are supplied by
//! the caller through a [`SearchConfig`], which ties a [`PointFactory`]
//! to the neighbour and cost functions written for its point type. A
//! mismatched combination does not type-check.

use num_traits::{One, Zero};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;
use tracing::debug;

use crate::common::configuration::BLANK_TAG;
use crate::common::error::{AlgorithmError, Result};
use crate::spatial::factory::{PlainPointFactory, PointFactory};
use crate::spatial::point::{Coordinate, Locatable, Point};

/// Cost function signature usable as a plain function pointer
pub type CostFn<P, K> = fn(&P, &P, K) -> K;

/// Neighbour function signature usable as a plain function pointer
pub type NeighbourFn<P, F> = fn(&P, &HashSet<P>, &F) -> Vec<P>;

/// Point factory bundled with the cost and neighbour functions for its points
///
/// - `cost_fn(current, next, accumulated)` returns the total cost of reaching
///   `next` through `current`; it must never return less than `accumulated`
/// - `neighbour_fn(location, graph, factory)` returns the points adjacent to
///   `location` that are members of `graph`
#[derive(Clone, Debug)]
pub struct SearchConfig<F, C, N> {
    factory: F,
    cost_fn: C,
    neighbour_fn: N,
}

impl<F, C, N> SearchConfig<F, C, N> {
    /// Bundle a factory with its cost and neighbour functions
    pub const fn new(factory: F, cost_fn: C, neighbour_fn: N) -> Self {
        Self {
            factory,
            cost_fn,
            neighbour_fn,
        }
    }

    /// Factory used to construct neighbour candidates
    pub const fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F> SearchConfig<F, CostFn<F::Point, u64>, NeighbourFn<F::Point, F>>
where
    F: PointFactory,
    F::Point: Clone + Eq + Hash,
{
    /// Unit-cost search over the four cardinal neighbours
    pub const fn cardinal(factory: F) -> Self {
        Self::new(factory, unit_cost::<F::Point, u64>, cardinal_neighbours::<F>)
    }
}

/// Cost function charging one unit per move
pub fn unit_cost<P, K>(_: &P, _: &P, accumulated: K) -> K
where
    K: One + Add<Output = K>,
{
    accumulated + K::one()
}

/// Neighbour function returning the members of `graph` one step west, east,
/// north or south of `location`
///
/// The returned points are the graph's own instances, so they keep the
/// tags they were stored with. Steps past the edge of the coordinate
/// domain are skipped.
pub fn cardinal_neighbours<F>(
    location: &F::Point,
    graph: &HashSet<F::Point>,
    factory: &F,
) -> Vec<F::Point>
where
    F: PointFactory,
    F::Point: Clone + Eq + Hash,
{
    location
        .location()
        .cardinal_neighbours()
        .into_iter()
        .filter_map(|step| {
            let candidate = factory.create(step.x(), step.y(), step.z(), BLANK_TAG);
            graph.get(&candidate).cloned()
        })
        .collect()
}

/// Outcome of one search: end cost plus the distance and predecessor maps
///
/// The maps cover every point that received a tentative distance before
/// the search stopped, not just the points on the final path.
#[derive(Clone, Debug)]
pub struct DijkstraResult<P, K> {
    end_cost: Option<K>,
    distances: HashMap<P, K>,
    predecessors: HashMap<P, P>,
}

impl<P, K> DijkstraResult<P, K>
where
    P: Clone + Eq + Hash,
    K: Copy + Debug,
{
    /// Minimum cost of reaching the end point, `None` if unreachable
    pub const fn end_cost(&self) -> Option<K> {
        self.end_cost
    }

    /// Whether the end point was reached
    pub const fn is_reachable(&self) -> bool {
        self.end_cost.is_some()
    }

    /// Minimum cost of reaching the end point
    ///
    /// # Errors
    ///
    /// Returns `Unreachable` if the frontier emptied before the end point
    /// was dequeued.
    pub fn require_end_cost(&self) -> Result<K> {
        self.end_cost.ok_or(AlgorithmError::Unreachable {
            explored: self.distances.len(),
        })
    }

    /// Best known cost for every visited point
    pub const fn distances(&self) -> &HashMap<P, K> {
        &self.distances
    }

    /// Previous point on the best known path for every visited point but the start
    pub const fn predecessors(&self) -> &HashMap<P, P> {
        &self.predecessors
    }

    /// Best known cost of reaching `point`
    pub fn distance_to(&self, point: &P) -> Option<K> {
        self.distances.get(point).copied()
    }

    /// Walk the predecessor map back from `target` to the start
    ///
    /// Returns the path start first, or `None` if `target` never received a
    /// distance.
    pub fn path_to(&self, target: &P) -> Option<Vec<P>> {
        if !self.distances.contains_key(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = self.predecessors.get(current) {
            // A predecessor chain can never be longer than the visited set
            if path.len() > self.distances.len() {
                return None;
            }
            path.push(previous.clone());
            current = previous;
        }

        path.reverse();
        Some(path)
    }
}

/// Frontier entry ordered by cost, then by insertion order
struct FrontierEntry<P, K> {
    cost: K,
    sequence: usize,
    point: P,
}

impl<P, K: Ord> PartialEq for FrontierEntry<P, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P, K: Ord> Eq for FrontierEntry<P, K> {}

impl<P, K: Ord> Ord for FrontierEntry<P, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<P, K: Ord> PartialOrd for FrontierEntry<P, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest path from `start` to `end` through `graph`
///
/// Stops as soon as `end` is dequeued. Frontier entries made obsolete by a
/// later improvement are skipped when they surface. If the frontier empties
/// first the result reports the end as unreachable.
pub fn dijkstra<F, C, N, K>(
    graph: &HashSet<F::Point>,
    start: &F::Point,
    end: &F::Point,
    config: &SearchConfig<F, C, N>,
) -> DijkstraResult<F::Point, K>
where
    F: PointFactory,
    F::Point: Clone + Eq + Hash,
    C: Fn(&F::Point, &F::Point, K) -> K,
    N: Fn(&F::Point, &HashSet<F::Point>, &F) -> Vec<F::Point>,
    K: Copy + Ord + Zero + Debug,
{
    let mut distances: HashMap<F::Point, K> = HashMap::new();
    let mut predecessors: HashMap<F::Point, F::Point> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0usize;

    distances.insert(start.clone(), K::zero());
    frontier.push(Reverse(FrontierEntry {
        cost: K::zero(),
        sequence,
        point: start.clone(),
    }));

    let mut end_cost = None;
    let mut settled = 0usize;

    while let Some(Reverse(entry)) = frontier.pop() {
        if distances
            .get(&entry.point)
            .is_some_and(|&recorded| entry.cost > recorded)
        {
            continue;
        }
        settled += 1;

        if entry.point == *end {
            end_cost = Some(entry.cost);
            break;
        }

        for next in (config.neighbour_fn)(&entry.point, graph, &config.factory) {
            let candidate = (config.cost_fn)(&entry.point, &next, entry.cost);
            if distances
                .get(&next)
                .is_none_or(|&recorded| candidate < recorded)
            {
                distances.insert(next.clone(), candidate);
                predecessors.insert(next.clone(), entry.point.clone());
                sequence += 1;
                frontier.push(Reverse(FrontierEntry {
                    cost: candidate,
                    sequence,
                    point: next,
                }));
            }
        }
    }

    debug!(
        graph = graph.len(),
        settled,
        discovered = distances.len(),
        end_cost = ?end_cost,
        "dijkstra search finished"
    );

    DijkstraResult {
        end_cost,
        distances,
        predecessors,
    }
}

/// Unit-cost cardinal search over plain points
pub fn shortest_path<T>(
    graph: &HashSet<Point<T>>,
    start: &Point<T>,
    end: &Point<T>,
) -> DijkstraResult<Point<T>, u64>
where
    T: Coordinate + Eq + Hash,
{
    dijkstra(
        graph,
        start,
        end,
        &SearchConfig::cardinal(PlainPointFactory::new()),
    )
}
