//! Spatial data structures: points, point variants and grids
//!
//! This module contains spatial-related functionality including:
//! - The coordinate-only [`Point`] model and the [`Locatable`] capability
//! - Point factories and the directional and maze point variants
//! - Character grid parsing and conversion into point sets

/// Headings of travel and turn classification
pub mod direction;
/// Points carrying a heading of arrival
pub mod directional;
/// Point construction capability
pub mod factory;
/// Character grids and grid-to-point conversion
pub mod grid;
/// Points classified by maze tile role
pub mod maze;
/// Core coordinate model
pub mod point;

pub use direction::{Direction, Turn};
pub use directional::{DirectionalPoint, DirectionalPointFactory};
pub use factory::{PlainPointFactory, PointFactory};
pub use grid::CharGrid;
pub use maze::{MazePoint, MazePointFactory, TileRole};
pub use point::{Coordinate, Locatable, Point};
