//! Turn-penalised search built from directional points
//!
//! Each point remembers the heading it was entered with. Stepping to a
//! neighbour charges a cost that depends on how sharply the heading
//! changes, so the cheapest route prefers long straight corridors.

use std::collections::HashSet;
use std::hash::Hash;

use crate::algorithm::dijkstra::{NeighbourFn, SearchConfig};
use crate::common::configuration::{QUARTER_TURN_COST, REVERSE_TURN_COST, STRAIGHT_MOVE_COST};
use crate::spatial::direction::{Direction, Turn};
use crate::spatial::directional::{DirectionalPoint, DirectionalPointFactory};
use crate::spatial::point::Coordinate;

/// Cost of one step for each kind of turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnPenalty {
    /// Step that keeps the heading
    pub straight: u64,
    /// Step after a 90 degree turn
    pub quarter: u64,
    /// Step after a 180 degree turn
    pub reverse: u64,
}

impl Default for TurnPenalty {
    fn default() -> Self {
        Self {
            straight: STRAIGHT_MOVE_COST,
            quarter: QUARTER_TURN_COST,
            reverse: REVERSE_TURN_COST,
        }
    }
}

impl TurnPenalty {
    /// Step cost for `turn`
    pub const fn step_cost(&self, turn: Turn) -> u64 {
        match turn {
            Turn::Straight => self.straight,
            Turn::Quarter => self.quarter,
            Turn::Reverse => self.reverse,
        }
    }

    /// Total cost after stepping from `current` onto `next`
    ///
    /// Saturates instead of wrapping on overflow.
    pub fn cost<T: Coordinate>(
        &self,
        current: &DirectionalPoint<T>,
        next: &DirectionalPoint<T>,
        accumulated: u64,
    ) -> u64 {
        let turn = next.heading().turn_from(current.heading());
        accumulated.saturating_add(self.step_cost(turn))
    }
}

/// Cardinal neighbours of `location` present in `graph`, each facing the
/// direction of the step that reaches it
pub fn directional_neighbours<T>(
    location: &DirectionalPoint<T>,
    graph: &HashSet<DirectionalPoint<T>>,
    factory: &DirectionalPointFactory<T>,
) -> Vec<DirectionalPoint<T>>
where
    T: Coordinate + Eq + Hash,
{
    Direction::CARDINAL
        .into_iter()
        .filter_map(|heading| {
            let step = location.point().step(heading)?;
            graph
                .get(&factory.create_heading(step, Direction::None))
                .map(|stored| factory.create_heading(*stored.point(), heading))
        })
        .collect()
}

/// Search configuration charging `penalty` for every step
///
/// The start point passed to the search should carry its initial heading;
/// a start without one makes the first step count as straight.
pub fn turn_penalty_search<T>(
    penalty: TurnPenalty,
) -> SearchConfig<
    DirectionalPointFactory<T>,
    impl Fn(&DirectionalPoint<T>, &DirectionalPoint<T>, u64) -> u64,
    NeighbourFn<DirectionalPoint<T>, DirectionalPointFactory<T>>,
>
where
    T: Coordinate + Eq + Hash,
{
    SearchConfig::new(
        DirectionalPointFactory::new(),
        move |current: &DirectionalPoint<T>, next: &DirectionalPoint<T>, accumulated: u64| {
            penalty.cost(current, next, accumulated)
        },
        directional_neighbours::<T>,
    )
}
