//! Shape constants and runtime configuration defaults

// Polar shape derivation constants
/// Clearance in pixels kept between the outermost track and each canvas edge
pub const EDGE_MARGIN: usize = 5;

/// Width of the open central room, measured in track widths
pub const ROOM_RADIUS_TRACKS: usize = 2;

/// Minimum sector count on any track (one sector per quadrant)
pub const MIN_TRACK_SECTORS: usize = 4;

// Safety limits to prevent excessive memory allocation
/// Maximum allowed side length for a rectangular maze
pub const MAX_GRID_SIDE: usize = 10_000;

/// Maximum allowed track count for a polar maze
pub const MAX_TRACK_COUNT: usize = 1_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default canvas extent in pixels (width = height)
pub const DEFAULT_EXTENT: usize = 400;

/// Default rectangular maze side length in cells
pub const DEFAULT_GRID_SIDE: usize = 30;

/// Default track width in pixels for polar mazes
pub const DEFAULT_TRACK_WIDTH: usize = 20;

/// Default spoke count per quadrant on the innermost track
pub const DEFAULT_SPOKES_PER_QUADRANT: usize = 6;
