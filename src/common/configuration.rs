//! Algorithm constants and runtime configuration defaults

// Tile characters recognised by the grid conversion and maze roles
/// Tag given to points constructed without one
pub const BLANK_TAG: char = ' ';
/// Grid character marking an impassable cell
pub const WALL_TAG: char = '#';
/// Grid character marking the start of a maze
pub const START_TAG: char = 'S';
/// Grid character marking the end of a maze
pub const END_TAG: char = 'E';

// Turn-penalty costs used by the directional search
/// Cost of one step that keeps the current heading
pub const STRAIGHT_MOVE_COST: u64 = 1;
/// Cost of one step that turns 90 degrees (the turn plus the step)
pub const QUARTER_TURN_COST: u64 = 1001;
/// Cost of one step that reverses the heading (two turns plus the step)
pub const REVERSE_TURN_COST: u64 = 2001;

// Safety limits for routines that can explore without bound
/// Maximum number of Bron–Kerbosch frames expanded before giving up
pub const DEFAULT_CLIQUE_EXPANSION_LIMIT: usize = 1_000_000;
/// Maximum number of interior points a flood fill may collect
pub const DEFAULT_FLOOD_FILL_LIMIT: usize = 1_000_000;
