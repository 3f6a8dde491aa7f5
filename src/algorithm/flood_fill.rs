//! Breadth-first enumeration of the cells enclosed by a polygon

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use tracing::{debug, warn};

use crate::algorithm::polygon::Polygon;
use crate::common::configuration::DEFAULT_FLOOD_FILL_LIMIT;
use crate::common::error::{Result, budget_exhausted};
use crate::spatial::point::{Coordinate, Locatable, Point};

impl<T> Polygon<T>
where
    T: Coordinate + Eq + Hash,
{
    /// Every cell reachable from `start` without leaving the polygon
    ///
    /// Boundary cells are included. The result is in breadth-first order
    /// and free of duplicates; it is empty when `start` lies outside.
    ///
    /// # Errors
    ///
    /// Returns `BudgetExhausted` if more than [`DEFAULT_FLOOD_FILL_LIMIT`]
    /// cells are collected.
    pub fn flood_fill(&self, start: &Point<T>) -> Result<Vec<Point<T>>> {
        self.flood_fill_with_limit(start, DEFAULT_FLOOD_FILL_LIMIT)
    }

    /// Flood fill that gives up after collecting `limit` cells
    ///
    /// # Errors
    ///
    /// Returns `BudgetExhausted` once the fill would exceed `limit` cells.
    pub fn flood_fill_with_limit(&self, start: &Point<T>, limit: usize) -> Result<Vec<Point<T>>> {
        let mut inside = Vec::new();
        let mut visited = HashSet::from([*start]);
        let mut queue = VecDeque::from([*start]);

        while let Some(cell) = queue.pop_front() {
            if !self.contains(&cell) {
                continue;
            }
            if inside.len() == limit {
                warn!(limit, "flood fill budget exhausted");
                return Err(budget_exhausted("flood_fill", limit));
            }
            inside.push(cell);

            for neighbour in cell.cardinal_neighbours() {
                if visited.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }

        debug!(
            boundary = self.boundary().len(),
            filled = inside.len(),
            visited = visited.len(),
            "flood fill finished"
        );
        Ok(inside)
    }
}

/// Flood fill from `start` inside the polygon outlined by `boundary`
///
/// # Errors
///
/// Returns `BudgetExhausted` if the fill exceeds the default budget.
pub fn flood_fill<P>(boundary: &[P], start: &P) -> Result<Vec<Point<P::Coord>>>
where
    P: Locatable,
    P::Coord: Eq + Hash,
{
    Polygon::new(boundary).flood_fill(&start.location())
}
