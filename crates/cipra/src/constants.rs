//! Grid and tile constants.
//!
//! Every size in the engine follows from two numbers: the side of the grid
//! (4) and the number of boundary points on a tile (8).

/// Side length of the square grid.
///
/// The grid is a torus, so row and column arithmetic wraps modulo this value.
pub const GRID_SIZE: usize = 4;

/// Number of tiles (and positions) on the grid.
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE; // 16

/// Number of distinct tile variants.
pub const VARIANT_COUNT: usize = 16;

/// Number of boundary points on a tile, two per edge.
pub const BOUNDARY_POINTS: usize = 8;

/// Number of ribbon strands crossing one tile.
pub const STRANDS_PER_TILE: usize = BOUNDARY_POINTS / 2; // 4

/// Number of endpoint keys on the grid (one per position and boundary point).
pub const ENDPOINT_KEYS: usize = TILE_COUNT * BOUNDARY_POINTS; // 128

/// Sum of all loop lengths in any decomposition.
///
/// Each step of a loop consumes one strand, so the total equals
/// `TILE_COUNT * STRANDS_PER_TILE`.
pub const TOTAL_STEPS: usize = TILE_COUNT * STRANDS_PER_TILE; // 64
