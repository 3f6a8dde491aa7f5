//! Rectangular character grids and their conversion into point sets
//!
//! Puzzle inputs usually arrive as rows of characters. [`CharGrid`] stores
//! them in an ndarray (indexed `[row, column]`) and turns them into the
//! point sets consumed by the searches, with `x` = column and `y` = row.

use ndarray::{Array2, Axis};
use num_traits::NumCast;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

use crate::common::error::{Result, computation_error, invalid_parameter};
use crate::spatial::factory::{PlainPointFactory, PointFactory};
use crate::spatial::point::{Coordinate, Locatable, Point};

/// A rectangular block of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    cells: Array2<char>,
}

impl CharGrid {
    /// Build a grid from text rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the rows do not all have the same
    /// number of characters.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());

        let mut cells = Vec::with_capacity(width * rows.len());
        for (index, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let length = cells.len() - before;
            if length != width {
                return Err(invalid_parameter(
                    "rows",
                    &index,
                    &format!("row has {length} characters, expected {width}"),
                ));
            }
        }

        let cells = Array2::from_shape_vec((rows.len(), width), cells)
            .map_err(|error| computation_error("CharGrid::parse", &error))?;
        Ok(Self { cells })
    }

    /// Number of rows (grid height)
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns (grid width)
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Character at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get([y, x]).copied()
    }

    /// The grid turned 90 degrees clockwise
    ///
    /// The first column read bottom-up becomes the first row.
    #[must_use]
    pub fn rotate_clockwise(&self) -> Self {
        let mut flipped = self.cells.view();
        flipped.invert_axis(Axis(0));
        Self {
            cells: flipped.reversed_axes().to_owned(),
        }
    }

    /// The grid as text rows
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Convert every non-excluded cell into a plain [`Point`] tagged with its character
    ///
    /// # Errors
    ///
    /// Returns `Computation` if a row or column index does not fit in `T`.
    pub fn to_points<T>(&self, excluded: &[char]) -> Result<HashSet<Point<T>>>
    where
        T: Coordinate + Eq + Hash,
    {
        self.to_points_with(excluded, &PlainPointFactory::new())
    }

    /// Convert every non-excluded cell into a point built by `factory`
    ///
    /// # Errors
    ///
    /// Returns `Computation` if a row or column index does not fit in the
    /// factory's coordinate type.
    pub fn to_points_with<F>(&self, excluded: &[char], factory: &F) -> Result<HashSet<F::Point>>
    where
        F: PointFactory,
        F::Point: Eq + Hash,
    {
        let mut points = HashSet::with_capacity(self.cells.len());

        for ((row, col), &tile) in self.cells.indexed_iter() {
            if excluded.contains(&tile) {
                continue;
            }
            let x = convert_index::<F::Coord>(col)?;
            let y = convert_index::<F::Coord>(row)?;
            points.insert(factory.create(x, y, <F::Coord as num_traits::Zero>::zero(), tile));
        }

        trace!(
            rows = self.rows(),
            cols = self.cols(),
            points = points.len(),
            "converted grid to points"
        );
        Ok(points)
    }
}

/// First point in `points` carrying `tag`
///
/// Intended for markers that occur once per grid, such as a start or end
/// tile; with several matches an arbitrary one is returned.
pub fn find_tagged<'a, P, I>(points: I, tag: char) -> Option<&'a P>
where
    P: Locatable + 'a,
    I: IntoIterator<Item = &'a P>,
{
    points.into_iter().find(|point| point.tag() == tag)
}

fn convert_index<T: NumCast>(index: usize) -> Result<T> {
    <T as NumCast>::from(index).ok_or_else(|| {
        computation_error(
            "CharGrid::to_points",
            &format!("grid index {index} does not fit the coordinate type"),
        )
    })
}
