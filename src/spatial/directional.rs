//! Points that remember the heading they were reached with

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::spatial::direction::Direction;
use crate::spatial::factory::PointFactory;
use crate::spatial::point::{Coordinate, Locatable, Point};

/// A [`Point`] annotated with its heading of arrival
///
/// The heading is search state, not identity: equality and hashing still
/// only look at the coordinates, so a distance map keyed by directional
/// points keeps one entry per cell.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalPoint<T> {
    point: Point<T>,
    heading: Direction,
}

impl<T: Coordinate> DirectionalPoint<T> {
    /// Create a 2D point with the given heading
    pub fn new(x: T, y: T, heading: Direction) -> Self {
        Self::from_point(Point::new(x, y), heading)
    }

    /// Attach a heading to an existing point
    pub const fn from_point(point: Point<T>, heading: Direction) -> Self {
        Self { point, heading }
    }

    /// Heading this point was reached with
    pub const fn heading(&self) -> Direction {
        self.heading
    }

    /// Same location with a different heading
    #[must_use]
    pub fn facing(self, heading: Direction) -> Self {
        Self { heading, ..self }
    }

    /// The underlying plain point
    pub const fn point(&self) -> &Point<T> {
        &self.point
    }
}

impl<T: Coordinate> Locatable for DirectionalPoint<T> {
    type Coord = T;

    fn x(&self) -> T {
        self.point.x()
    }

    fn y(&self) -> T {
        self.point.y()
    }

    fn z(&self) -> T {
        self.point.z()
    }

    fn tag(&self) -> char {
        self.point.tag()
    }
}

impl<T: PartialEq> PartialEq for DirectionalPoint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl<T: Eq> Eq for DirectionalPoint<T> {}

impl<T: Hash> Hash for DirectionalPoint<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state);
    }
}

/// Factory for [`DirectionalPoint`]s
///
/// [`PointFactory::create`] yields points without a heading; the
/// directional neighbour function uses [`Self::create_heading`].
pub struct DirectionalPointFactory<T> {
    coordinate: PhantomData<T>,
}

impl<T> DirectionalPointFactory<T> {
    /// Create the factory
    pub const fn new() -> Self {
        Self {
            coordinate: PhantomData,
        }
    }
}

impl<T: Coordinate> DirectionalPointFactory<T> {
    /// Construct a point that carries a heading
    pub fn create_heading(&self, location: Point<T>, heading: Direction) -> DirectionalPoint<T> {
        DirectionalPoint::from_point(location, heading)
    }
}

impl<T> Default for DirectionalPointFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DirectionalPointFactory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DirectionalPointFactory<T> {}

impl<T> fmt::Debug for DirectionalPointFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DirectionalPointFactory")
    }
}

impl<T: Coordinate> PointFactory for DirectionalPointFactory<T> {
    type Coord = T;
    type Point = DirectionalPoint<T>;

    fn create(&self, x: T, y: T, z: T, tag: char) -> DirectionalPoint<T> {
        DirectionalPoint::from_point(Point::from_parts(x, y, z, tag), Direction::None)
    }
}
