//! Headings of travel on a grid and the turns between them

/// Direction of travel, with `y` growing downwards (screen convention)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No heading yet (e.g. a target point)
    #[default]
    None,
    /// Towards smaller `y`
    Up,
    /// Towards larger `y`
    Down,
    /// Towards smaller `x`
    Left,
    /// Towards larger `x`
    Right,
}

/// Change of heading between two consecutive moves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Same heading, or one side has no heading
    Straight,
    /// Perpendicular heading
    Quarter,
    /// Opposite heading
    Reverse,
}

impl Direction {
    /// The four real headings in west, east, north, south order
    pub const CARDINAL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Heading pointing the other way (`None` stays `None`)
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step `(dx, dy)` taken when moving in this heading
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::None => (0, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Classify the turn needed to go from `previous` to this heading
    pub fn turn_from(self, previous: Self) -> Turn {
        if self == Self::None || previous == Self::None || self == previous {
            Turn::Straight
        } else if self == previous.opposite() {
            Turn::Reverse
        } else {
            Turn::Quarter
        }
    }
}
