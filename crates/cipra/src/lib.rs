//! Cipra Loops - loop decomposition of double-ribbon tiles on a torus
//!
//! Sixteen square tiles sit on a 4x4 grid whose edges wrap around. Every
//! tile carries two ribbons that cross it as four strands, each strand
//! joining two of the tile's eight boundary points. Strands continue into
//! the neighbouring tile, so the 64 strands of a configuration close up into
//! a handful of disjoint loops. This crate computes those loops, maps every
//! ribbon end back to its loop, and assigns display colours.
//!
//! # Boundary Points
//!
//! ```text
//!        6   5
//!      +-------+
//!    7 |       | 4
//!      |       |
//!    0 |       | 3
//!      +-------+
//!        1   2
//! ```
//!
//! | Points | Edge | Step (row, col) | Entry in neighbour |
//! |--------|--------|-----------------|--------------------|
//! | 0, 7 | left | (0, -1) | 3, 4 |
//! | 1, 2 | bottom | (+1, 0) | 6, 5 |
//! | 3, 4 | right | (0, +1) | 0, 7 |
//! | 5, 6 | top | (-1, 0) | 2, 1 |
//!
//! # Pipeline
//!
//! ```text
//! GridConfiguration --get_all_loops--> [Loop]
//!                   --EndpointLoopMap::build--> key -> LoopIndex
//!                   --path_color--> "#rrggbb"
//! ```
//!
//! Every table the walk reads (connections, strands, entry points) is built
//! at compile time, so one step is three array lookups and a full
//! decomposition touches each of the 128 endpoint keys once.
//!
//! # Example
//!
//! ```
//! use cipra::{ColorMode, GridConfiguration, LoopAnalysis};
//!
//! let analysis = LoopAnalysis::new(GridConfiguration::identity());
//! let summary = analysis.summary(ColorMode::ByLength);
//! assert_eq!(summary.loop_count, 4);
//! assert_eq!(summary.total_length, 64);
//! assert_eq!(summary.lengths(), vec![16, 16, 16, 16]);
//! ```
//!
//! # Example: Moves
//!
//! ```
//! use cipra::{get_all_loops, GridConfiguration, Position};
//!
//! let a = Position::new(0).unwrap();
//! let b = Position::new(15).unwrap();
//! let config = GridConfiguration::identity().swapped(a, b);
//! let lengths: Vec<usize> = get_all_loops(&config).iter().map(|l| l.len()).collect();
//! assert_eq!(lengths, vec![52, 12]);
//! ```

// Grid dimensions and table sizes
pub mod constants;

// Error types
pub mod error;

// Tile variants, boundary points and the connection tables
pub mod tile;

// Positions, endpoint keys and configurations
pub mod grid;

// Single-strand walks
pub mod trace;

// Full loop decomposition
pub mod decompose;

// Endpoint-to-loop map
pub mod index;

// Loop and strand colours
pub mod color;

// Per-configuration analysis and loop list
pub mod summary;

pub use color::{
    color_for_loop_index, color_for_loop_length, density_shade, loop_color, path_color, ColorMode,
    DEFAULT_COLOR, DIMMED_COLOR, LOOP_INDEX_COLORS, LOOP_LENGTH_COLORS,
};
pub use constants::{
    BOUNDARY_POINTS, ENDPOINT_KEYS, GRID_SIZE, STRANDS_PER_TILE, TILE_COUNT, TOTAL_STEPS,
    VARIANT_COUNT,
};
pub use decompose::{get_all_loops, Loop, LoopDecomposition, LoopIndex};
pub use error::{CipraError, CipraResult, ConfigurationFault};
pub use grid::{adjacent_position, EndpointKey, GridConfiguration, Position, Shuffle, TileMove};
pub use index::{get_endpoint_to_loop_map, highlighted_strand_count, EndpointLoopMap};
pub use summary::{LoopAnalysis, LoopEntry, LoopSummary};
pub use tile::{connectivity, entry_point, BoundaryPoint, Edge, Strand, TileVariant};
pub use trace::{advance, trace_loop, walk, LoopWalk, Step};
