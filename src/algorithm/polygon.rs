//! Even-odd point-in-polygon test over boundary point sets
//!
//! The polygon is the set of grid cells on its boundary, not a vector path.
//! A point is classified by scanning its row to the right and counting how
//! often the boundary is crossed. Horizontally contiguous boundary cells
//! form one straight edge and are collapsed to their corners before
//! counting.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::spatial::point::{Coordinate, Locatable, Point};

/// Where a point lies relative to a polygon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Containment {
    /// The point is one of the boundary cells
    Boundary,
    /// Strictly inside
    Interior,
    /// Strictly outside
    Exterior,
}

impl Containment {
    /// Boundary cells count as inside
    pub const fn is_inside(self) -> bool {
        matches!(self, Self::Boundary | Self::Interior)
    }
}

/// Boundary point set indexed by row for repeated containment queries
#[derive(Clone, Debug)]
pub struct Polygon<T> {
    boundary: HashSet<Point<T>>,
    rows: HashMap<T, Vec<T>>,
}

impl<T> Polygon<T>
where
    T: Coordinate + Eq + Hash,
{
    /// Index the given boundary points
    ///
    /// Order and connectivity of the input are irrelevant; tags and variant
    /// data are dropped.
    pub fn new<'a, P, I>(boundary: I) -> Self
    where
        P: Locatable<Coord = T> + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        let boundary: HashSet<Point<T>> = boundary
            .into_iter()
            .map(|point| Point::with_depth(point.x(), point.y(), point.z()))
            .collect();

        let mut rows: HashMap<T, Vec<T>> = HashMap::new();
        for point in &boundary {
            rows.entry(point.y()).or_default().push(point.x());
        }
        for xs in rows.values_mut() {
            xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            xs.dedup();
        }

        Self { boundary, rows }
    }

    /// Boundary cells
    pub const fn boundary(&self) -> &HashSet<Point<T>> {
        &self.boundary
    }

    /// Classify `point` as boundary, interior or exterior
    pub fn classify<P>(&self, point: &P) -> Containment
    where
        P: Locatable<Coord = T>,
    {
        let (x, y) = (point.x(), point.y());
        if self.boundary.contains(&Point::with_depth(x, y, point.z())) {
            return Containment::Boundary;
        }

        let Some(row) = self.rows.get(&y) else {
            return Containment::Exterior;
        };

        // Nothing to the left on this row means the point is outside
        if !row.first().is_some_and(|&left| left < x) {
            return Containment::Exterior;
        }

        let split = row.partition_point(|&bx| bx <= x);
        let right = row.get(split..).unwrap_or(&[]);
        if right.is_empty() {
            return Containment::Exterior;
        }

        if count_crossings(right) % 2 == 1 {
            Containment::Interior
        } else {
            Containment::Exterior
        }
    }

    /// Whether `point` lies inside or on the boundary
    pub fn contains<P>(&self, point: &P) -> bool
    where
        P: Locatable<Coord = T>,
    {
        self.classify(point).is_inside()
    }
}

/// Number of boundary crossings along a sorted row of boundary x values
///
/// A lone cell is one crossing. A run of contiguous cells counts its
/// opening corner, and its closing corner as well once another cell
/// follows it on the row.
fn count_crossings<T: Coordinate>(xs: &[T]) -> usize {
    let one = T::one();
    let mut crossings = 0;
    let mut previous: Option<T> = None;
    let mut in_run = false;

    for &x in xs {
        let contiguous = previous.is_some_and(|last| last + one == x);
        if !contiguous {
            if in_run {
                crossings += 1;
            }
            crossings += 1;
        }
        in_run = contiguous;
        previous = Some(x);
    }

    crossings
}

/// One-shot containment test of `point` against `boundary`
///
/// Builds the row index on every call; use [`Polygon`] for repeated queries.
pub fn is_inside<P>(point: &P, boundary: &[P]) -> bool
where
    P: Locatable,
    P::Coord: Eq + Hash,
{
    Polygon::new(boundary).contains(point)
}
