//! Point construction capability
//!
//! Searches and grid conversions never build points directly; they go
//! through a [`PointFactory`] so callers can swap in their own point variant
//! (headings, maze roles, ...) without touching the algorithms.

use num_traits::Zero;
use std::fmt;
use std::marker::PhantomData;

use crate::common::configuration::BLANK_TAG;
use crate::spatial::point::{Coordinate, Locatable, Point};

/// Builds one specific point variant from raw components
pub trait PointFactory {
    /// Coordinate type of the produced points
    type Coord: Coordinate;

    /// Point variant produced by this factory
    type Point: Locatable<Coord = Self::Coord>;

    /// Construct a point from every component
    fn create(&self, x: Self::Coord, y: Self::Coord, z: Self::Coord, tag: char) -> Self::Point;

    /// Construct a 2D point with a blank tag
    fn create_xy(&self, x: Self::Coord, y: Self::Coord) -> Self::Point {
        self.create(x, y, <Self::Coord as Zero>::zero(), BLANK_TAG)
    }
}

/// Factory for the plain [`Point`] type
pub struct PlainPointFactory<T> {
    coordinate: PhantomData<T>,
}

impl<T> PlainPointFactory<T> {
    /// Create the factory
    pub const fn new() -> Self {
        Self {
            coordinate: PhantomData,
        }
    }
}

impl<T> Default for PlainPointFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PlainPointFactory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PlainPointFactory<T> {}

impl<T> fmt::Debug for PlainPointFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPointFactory")
    }
}

impl<T: Coordinate> PointFactory for PlainPointFactory<T> {
    type Coord = T;
    type Point = Point<T>;

    fn create(&self, x: T, y: T, z: T, tag: char) -> Point<T> {
        Point::from_parts(x, y, z, tag)
    }
}
