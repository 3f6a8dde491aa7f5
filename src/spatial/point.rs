//! Coordinate model shared by every search, clique and containment routine
//!
//! A [`Point`] is a location in up to three dimensions plus a tag character
//! (typically the grid cell it was read from). Identity is the location
//! alone: two points at the same `(x, y, z)` are the same graph vertex no
//! matter how they are tagged. Richer point variants wrap a `Point` and
//! expose it through the [`Locatable`] capability trait.

use num_traits::{Bounded, Num, NumCast};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::common::configuration::BLANK_TAG;
use crate::spatial::direction::Direction;

/// Numeric domain usable as a point coordinate
///
/// Any bounded, ordered number with an additive identity and a unit step
/// qualifies: the primitive integers as well as `f32` and `f64`. Graph
/// membership additionally needs `Eq + Hash`, which restricts searches to
/// integers.
pub trait Coordinate: Num + NumCast + Bounded + Copy + PartialOrd + fmt::Debug {
    /// One unit towards the sign of `sign`, or `None` past the end of the domain
    ///
    /// A zero `sign` returns the value unchanged.
    fn unit_step(self, sign: i8) -> Option<Self> {
        match sign.cmp(&0) {
            Ordering::Less => (self > <Self as Bounded>::min_value()).then(|| self - Self::one()),
            Ordering::Greater => (self < <Self as Bounded>::max_value()).then(|| self + Self::one()),
            Ordering::Equal => Some(self),
        }
    }
}

impl<T> Coordinate for T where T: Num + NumCast + Bounded + Copy + PartialOrd + fmt::Debug {}

/// Read access to the location carried by any point variant
pub trait Locatable {
    /// Numeric type of the coordinates
    type Coord: Coordinate;

    /// Horizontal position (grid column)
    fn x(&self) -> Self::Coord;

    /// Vertical position (grid row)
    fn y(&self) -> Self::Coord;

    /// Depth
    fn z(&self) -> Self::Coord;

    /// Annotation carried alongside the location
    fn tag(&self) -> char;

    /// The bare location of this point as a plain [`Point`]
    fn location(&self) -> Point<Self::Coord> {
        Point::from_parts(self.x(), self.y(), self.z(), self.tag())
    }
}

/// A location in 2 or 3 dimensional space
///
/// Equality and hashing consider `(x, y, z)` only; see the module docs.
#[derive(Clone, Copy, Debug)]
pub struct Point<T> {
    x: T,
    y: T,
    z: T,
    tag: char,
}

impl<T: Coordinate> Point<T> {
    /// Create a 2D point (`z` = 0) with a blank tag
    pub fn new(x: T, y: T) -> Self {
        Self::from_parts(x, y, T::zero(), BLANK_TAG)
    }

    /// Create a 3D point with a blank tag
    pub const fn with_depth(x: T, y: T, z: T) -> Self {
        Self::from_parts(x, y, z, BLANK_TAG)
    }

    /// Create a 2D point carrying a tag
    pub fn tagged(x: T, y: T, tag: char) -> Self {
        Self::from_parts(x, y, T::zero(), tag)
    }

    /// Create a point from every component
    pub const fn from_parts(x: T, y: T, z: T, tag: char) -> Self {
        Self { x, y, z, tag }
    }

    /// The point one unit step towards `heading`, keeping depth
    ///
    /// The step carries a blank tag. `None` when the step would leave the
    /// coordinate domain, e.g. west of `x = 0` for unsigned coordinates.
    pub fn step(&self, heading: Direction) -> Option<Self> {
        let (dx, dy) = heading.delta();
        Some(Self::with_depth(
            self.x.unit_step(dx)?,
            self.y.unit_step(dy)?,
            self.z,
        ))
    }

    /// The points one unit step away in the plane
    ///
    /// Ordered west, east, north, south (north is `y - 1`). Steps that would
    /// leave the coordinate domain are skipped.
    pub fn cardinal_neighbours(&self) -> Vec<Self> {
        Direction::CARDINAL
            .into_iter()
            .filter_map(|heading| self.step(heading))
            .collect()
    }
}

impl<T: Coordinate> Locatable for Point<T> {
    type Coord = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }

    fn z(&self) -> T {
        self.z
    }

    fn tag(&self) -> char {
        self.tag
    }

    fn location(&self) -> Point<T> {
        *self
    }
}

impl<T: PartialEq> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl<T: Eq> Eq for Point<T> {}

impl<T: Hash> Hash for Point<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.z.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{}:{})", self.x, self.y, self.z, self.tag)
    }
}
