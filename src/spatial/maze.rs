//! Maze cells that know what their tag character means

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::common::configuration::{END_TAG, START_TAG, WALL_TAG};
use crate::spatial::factory::PointFactory;
use crate::spatial::point::{Coordinate, Locatable, Point};

/// Meaning of a maze tile character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileRole {
    /// Impassable cell
    Wall,
    /// Where the walk begins
    Start,
    /// Where the walk ends
    End,
    /// Any other character
    Open,
}

impl TileRole {
    /// Derive the role from a grid character
    pub const fn from_tag(tag: char) -> Self {
        match tag {
            WALL_TAG => Self::Wall,
            START_TAG => Self::Start,
            END_TAG => Self::End,
            _ => Self::Open,
        }
    }
}

/// A [`Point`] whose tag has been classified into a [`TileRole`]
#[derive(Clone, Copy, Debug)]
pub struct MazePoint<T> {
    point: Point<T>,
    role: TileRole,
}

impl<T: Coordinate> MazePoint<T> {
    /// Classify an existing point by its tag
    pub fn from_point(point: Point<T>) -> Self {
        Self {
            role: TileRole::from_tag(point.tag()),
            point,
        }
    }

    /// Role derived from the tag
    pub const fn role(&self) -> TileRole {
        self.role
    }

    /// Whether this cell is impassable
    pub fn is_wall(&self) -> bool {
        self.role == TileRole::Wall
    }

    /// Whether this cell is the maze start
    pub fn is_start(&self) -> bool {
        self.role == TileRole::Start
    }

    /// Whether this cell is the maze end
    pub fn is_end(&self) -> bool {
        self.role == TileRole::End
    }
}

impl<T: Coordinate> Locatable for MazePoint<T> {
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

impl<T: PartialEq> PartialEq for MazePoint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl<T: Eq> Eq for MazePoint<T> {}

impl<T: Hash> Hash for MazePoint<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state);
    }
}

/// Factory for [`MazePoint`]s
pub struct MazePointFactory<T> {
    coordinate: PhantomData<T>,
}

impl<T> MazePointFactory<T> {
    /// Create the factory
    pub const fn new() -> Self {
        Self {
            coordinate: PhantomData,
        }
    }
}

impl<T> Default for MazePointFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MazePointFactory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MazePointFactory<T> {}

impl<T> fmt::Debug for MazePointFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MazePointFactory")
    }
}

impl<T: Coordinate> PointFactory for MazePointFactory<T> {
    type Coord = T;
    type Point = MazePoint<T>;

    fn create(&self, x: T, y: T, z: T, tag: char) -> MazePoint<T> {
        MazePoint::from_point(Point::from_parts(x, y, z, tag))
    }
}
