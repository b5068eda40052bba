//! Support code for the `cipra-loops` client: settings resolution and
//! report rendering.

pub mod config;
pub mod report;

pub use config::{Overrides, PuzzleFile, Settings};
pub use report::{grid_text, loops_text, map_report, map_text, MoveReport, TileLoops, TileReport};
