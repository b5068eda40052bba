//! Display colours for loops and strands.
//!
//! Two schemes: by length, a warm-to-cool ramp over the lengths a 4x4 grid
//! can produce (4, 8, ..., 64), and by loop, the Tableau10 categorical
//! palette cycled by loop index.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decompose::{Loop, LoopIndex};
use crate::error::{CipraError, CipraResult};
use crate::grid::Position;
use crate::index::EndpointLoopMap;
use crate::tile::BoundaryPoint;

/// Fallback for lengths outside the ramp and for unowned strands.
pub const DEFAULT_COLOR: &str = "#cccccc";

/// Fill for strands that are not on the highlighted loop.
pub const DIMMED_COLOR: &str = "rgb(128, 128, 128)";

/// Length ramp, short loops warm and long loops cool.
pub const LOOP_LENGTH_COLORS: [(usize, &str); 16] = [
    (4, "#f59e0b"),  // amber
    (8, "#f97316"),  // orange
    (12, "#ef4444"), // red
    (16, "#ec4899"), // pink
    (20, "#d946ef"), // fuchsia
    (24, "#a855f7"), // purple
    (28, "#8b5cf6"), // violet
    (32, "#6366f1"), // indigo
    (36, "#3b82f6"), // blue
    (40, "#0ea5e9"), // sky
    (44, "#06b6d4"), // cyan
    (48, "#14b8a6"), // teal
    (52, "#10b981"), // emerald
    (56, "#22c55e"), // green
    (60, "#84cc16"), // lime
    (64, "#65a30d"), // dark lime
];

/// Tableau10.
pub const LOOP_INDEX_COLORS: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// Tile backgrounds by number of highlighted strands (0 to 4).
const DENSITY_SHADES: [&str; 5] = [
    "transparent",
    "rgb(217, 217, 217)",
    "rgb(179, 179, 179)",
    "rgb(140, 140, 140)",
    "rgb(102, 102, 102)",
];

/// How strands are coloured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ColorMode {
    /// Colour each loop by its length.
    #[default]
    ByLength,
    /// Colour each loop individually by its index.
    ByLoop,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByLength => write!(f, "by-length"),
            Self::ByLoop => write!(f, "by-loop"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = CipraError;

    fn from_str(s: &str) -> CipraResult<Self> {
        match s {
            "by-length" | "byLength" => Ok(Self::ByLength),
            "by-loop" | "byLoop" => Ok(Self::ByLoop),
            other => Err(CipraError::UnknownColorMode(other.to_string())),
        }
    }
}

/// Colour for a loop of `length` steps.
///
/// Lengths outside the ramp get [`DEFAULT_COLOR`].
#[must_use]
pub fn color_for_loop_length(length: usize) -> &'static str {
    LOOP_LENGTH_COLORS
        .iter()
        .find(|(len, _)| *len == length)
        .map_or(DEFAULT_COLOR, |&(_, color)| color)
}

/// Colour for the loop at `index`, cycling every ten loops.
#[inline]
#[must_use]
pub fn color_for_loop_index(index: LoopIndex) -> &'static str {
    LOOP_INDEX_COLORS[index % LOOP_INDEX_COLORS.len()]
}

/// Swatch colour for the loop at `index` under `mode`.
///
/// An index past the end of `loops` gets [`DEFAULT_COLOR`].
#[must_use]
pub fn loop_color(loops: &[Loop], index: LoopIndex, mode: ColorMode) -> &'static str {
    match (mode, loops.get(index)) {
        (_, None) => DEFAULT_COLOR,
        (ColorMode::ByLoop, Some(_)) => color_for_loop_index(index),
        (ColorMode::ByLength, Some(l)) => color_for_loop_length(l.len()),
    }
}

/// Fill for the strand with `endpoints` on the tile at `position`.
///
/// The owning loop is looked up by the first endpoint. An unowned strand gets
/// [`DEFAULT_COLOR`].
#[must_use]
pub fn path_color(
    loops: &[Loop],
    endpoint_to_loop: &EndpointLoopMap,
    position: Position,
    endpoints: (BoundaryPoint, BoundaryPoint),
    mode: ColorMode,
) -> &'static str {
    match endpoint_to_loop.loop_at(position, endpoints.0) {
        Some(index) => loop_color(loops, index, mode),
        None => DEFAULT_COLOR,
    }
}

/// Background for a tile carrying `count` strands of the highlighted loop.
#[must_use]
pub fn density_shade(count: usize) -> &'static str {
    DENSITY_SHADES[count.min(DENSITY_SHADES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::get_all_loops;
    use crate::grid::GridConfiguration;
    use crate::index::get_endpoint_to_loop_map;
    use crate::tile::TileVariant;

    #[test]
    fn test_length_colors() {
        assert_eq!(color_for_loop_length(4), "#f59e0b");
        assert_eq!(color_for_loop_length(16), "#ec4899");
        assert_eq!(color_for_loop_length(64), "#65a30d");
    }

    #[test]
    fn test_length_default() {
        assert_eq!(color_for_loop_length(0), DEFAULT_COLOR);
        assert_eq!(color_for_loop_length(5), DEFAULT_COLOR);
        assert_eq!(color_for_loop_length(99), DEFAULT_COLOR);
    }

    #[test]
    fn test_length_ramp_distinct() {
        for (i, (len_a, color_a)) in LOOP_LENGTH_COLORS.iter().enumerate() {
            assert_eq!(*len_a, 4 * (i + 1));
            for (_, color_b) in &LOOP_LENGTH_COLORS[i + 1..] {
                assert_ne!(color_a, color_b);
            }
        }
    }

    #[test]
    fn test_index_colors_cycle() {
        assert_eq!(color_for_loop_index(0), "#4e79a7");
        assert_eq!(color_for_loop_index(10), "#4e79a7");
        for i in 0..30 {
            assert_eq!(color_for_loop_index(i), color_for_loop_index(i + 10));
        }
    }

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("by-length".parse::<ColorMode>(), Ok(ColorMode::ByLength));
        assert_eq!("byLoop".parse::<ColorMode>(), Ok(ColorMode::ByLoop));
        assert_eq!(
            "rainbow".parse::<ColorMode>(),
            Err(CipraError::UnknownColorMode("rainbow".to_string()))
        );
        assert_eq!(ColorMode::ByLoop.to_string(), "by-loop");
        assert_eq!(ColorMode::default(), ColorMode::ByLength);
    }

    #[test]
    fn test_path_color_dispatch() {
        let config = GridConfiguration::identity();
        let loops = get_all_loops(&config);
        let map = get_endpoint_to_loop_map(&config);
        let strand = config.variant_at(Position::ZERO).strands()[0];

        // Identity: four loops of sixteen, the first owning key 0-0.
        assert_eq!(
            path_color(&loops, &map, Position::ZERO, strand.endpoints(), ColorMode::ByLength),
            "#ec4899"
        );
        assert_eq!(
            path_color(&loops, &map, Position::ZERO, strand.endpoints(), ColorMode::ByLoop),
            "#4e79a7"
        );
    }

    #[test]
    fn test_path_color_unowned() {
        let config = GridConfiguration::uniform(TileVariant::default());
        let map = EndpointLoopMap::build(&config, &[]);
        let endpoints = (BoundaryPoint::new(0).unwrap(), BoundaryPoint::new(1).unwrap());
        assert_eq!(
            path_color(&[], &map, Position::ZERO, endpoints, ColorMode::ByLoop),
            DEFAULT_COLOR
        );
    }

    #[test]
    fn test_loop_color_out_of_range() {
        let loops = get_all_loops(&GridConfiguration::identity());
        assert_eq!(loop_color(&loops, 4, ColorMode::ByLoop), DEFAULT_COLOR);
        assert_eq!(loop_color(&loops, 3, ColorMode::ByLoop), "#76b7b2");
    }

    #[test]
    fn test_density_shades() {
        assert_eq!(density_shade(0), "transparent");
        assert_eq!(density_shade(1), "rgb(217, 217, 217)");
        assert_eq!(density_shade(4), "rgb(102, 102, 102)");
        assert_eq!(density_shade(9), "rgb(102, 102, 102)");
    }
}
