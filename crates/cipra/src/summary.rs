//! Everything derived from one configuration, computed once.
//!
//! A renderer holds a [`LoopAnalysis`] for as long as a configuration is on
//! screen and rebuilds it after every move. [`LoopSummary`] is the flattened
//! form the loop list and the CLI report show.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{density_shade, loop_color, path_color, ColorMode, DIMMED_COLOR};
use crate::constants::TILE_COUNT;
use crate::decompose::{LoopDecomposition, LoopIndex};
use crate::grid::{EndpointKey, GridConfiguration, Position};
use crate::index::{highlighted_strand_count, EndpointLoopMap};
use crate::tile::Strand;

/// Loops, ownership map and colour lookups for one configuration.
#[derive(Clone, Debug)]
pub struct LoopAnalysis {
    config: GridConfiguration,
    decomposition: LoopDecomposition,
    map: EndpointLoopMap,
}

impl LoopAnalysis {
    /// Decomposes `config` and builds its endpoint map.
    #[must_use]
    pub fn new(config: GridConfiguration) -> Self {
        let decomposition = LoopDecomposition::new(&config);
        let map = EndpointLoopMap::build(&config, decomposition.loops());
        Self {
            config,
            decomposition,
            map,
        }
    }

    /// The analysed configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GridConfiguration {
        &self.config
    }

    /// The loops.
    #[inline]
    #[must_use]
    pub const fn decomposition(&self) -> &LoopDecomposition {
        &self.decomposition
    }

    /// The endpoint-to-loop map.
    #[inline]
    #[must_use]
    pub const fn endpoint_map(&self) -> &EndpointLoopMap {
        &self.map
    }

    /// Fill for `strand` on the tile at `position`.
    ///
    /// With a highlighted loop, strands on other loops are dimmed.
    #[must_use]
    pub fn strand_color(
        &self,
        position: Position,
        strand: Strand,
        mode: ColorMode,
        highlighted: Option<LoopIndex>,
    ) -> &'static str {
        let owner = self.map.loop_at(position, strand.low());
        match highlighted {
            Some(h) if owner != Some(h) => DIMMED_COLOR,
            _ => path_color(
                self.decomposition.loops(),
                &self.map,
                position,
                strand.endpoints(),
                mode,
            ),
        }
    }

    /// Strand counts on `loop_index` for every position, row-major.
    #[must_use]
    pub fn density(&self, loop_index: LoopIndex) -> [usize; TILE_COUNT] {
        let mut counts = [0; TILE_COUNT];
        for position in Position::all() {
            counts[position.index()] =
                highlighted_strand_count(&self.config, &self.map, position, loop_index);
        }
        counts
    }

    /// Tile backgrounds for the density of `loop_index`, row-major.
    #[must_use]
    pub fn density_shades(&self, loop_index: LoopIndex) -> [&'static str; TILE_COUNT] {
        self.density(loop_index).map(density_shade)
    }

    /// Flattened report under `mode`.
    #[must_use]
    pub fn summary(&self, mode: ColorMode) -> LoopSummary {
        LoopSummary::new(&self.decomposition, mode)
    }
}

/// One row of the loop list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoopEntry {
    /// Index in discovery order, used to select the loop for highlighting.
    pub index: LoopIndex,
    /// Steps in the loop.
    pub length: usize,
    /// Different tiles the loop passes through.
    pub distinct_tiles: usize,
    /// Key the loop was traced from.
    pub start: EndpointKey,
    /// Swatch colour.
    pub color: String,
}

/// Loop count and the loop list, shortest first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoopSummary {
    /// Colour scheme used for `loops[..].color`.
    pub color_mode: ColorMode,
    /// Number of loops.
    pub loop_count: usize,
    /// Sum of loop lengths (always 64).
    pub total_length: usize,
    /// Loops sorted by ascending length.
    pub loops: Vec<LoopEntry>,
}

impl LoopSummary {
    /// Summarises `decomposition` under `mode`.
    #[must_use]
    pub fn new(decomposition: &LoopDecomposition, mode: ColorMode) -> Self {
        let loops = decomposition
            .sorted_by_length()
            .into_iter()
            .map(|(index, l)| LoopEntry {
                index,
                length: l.len(),
                distinct_tiles: l.distinct_tiles(),
                start: l.start(),
                color: loop_color(decomposition.loops(), index, mode).to_string(),
            })
            .collect();
        Self {
            color_mode: mode,
            loop_count: decomposition.len(),
            total_length: decomposition.total_length(),
            loops,
        }
    }

    /// Loop lengths in list order.
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.loops.iter().map(|e| e.length).collect()
    }
}
