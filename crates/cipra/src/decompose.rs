//! Partitioning every ribbon on the grid into disjoint loops.
//!
//! Endpoint keys are scanned position-major. Each key not yet consumed starts
//! a new loop; walking it consumes the entry and exit key of every step (one
//! strand, two of the tile's eight endpoints). The visited set is a single
//! `u128`, one bit per key.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::constants::TOTAL_STEPS;
use crate::grid::{EndpointKey, GridConfiguration, Position};
use crate::trace::{walk, LoopWalk};

/// Index of a loop within its decomposition.
pub type LoopIndex = usize;

/// A closed ribbon path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loop {
    start: EndpointKey,
    positions: Vec<Position>,
}

impl Loop {
    /// The endpoint key this loop was traced from.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> EndpointKey {
        self.start
    }

    /// Positions in visit order, one per step.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of steps (tile visits), counting repeated tiles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a traced loop.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of different tiles the loop passes through.
    #[must_use]
    pub fn distinct_tiles(&self) -> usize {
        let mask = self
            .positions
            .iter()
            .fold(0u16, |acc, p| acc | (1 << p.index()));
        mask.count_ones() as usize
    }

    /// Re-walks this loop's steps on `config`.
    ///
    /// `config` must be the configuration the loop was traced on.
    #[must_use]
    pub fn steps<'a>(&self, config: &'a GridConfiguration) -> LoopWalk<'a> {
        walk(config, self.start)
    }
}

/// Decomposes `config` into its loops.
///
/// Every endpoint key belongs to exactly one returned loop, and the loop
/// lengths sum to 64.
#[must_use]
pub fn get_all_loops(config: &GridConfiguration) -> Vec<Loop> {
    let mut visited: u128 = 0;
    let mut loops = Vec::new();

    for start in EndpointKey::all() {
        if visited & start.bit() != 0 {
            continue;
        }
        let mut positions = Vec::new();
        for step in walk(config, start) {
            visited |= step.entry_key().bit() | step.exit_key().bit();
            positions.push(step.position);
        }
        trace!(%start, length = positions.len(), "traced loop");
        loops.push(Loop { start, positions });
    }

    debug_assert_eq!(visited, u128::MAX, "unvisited endpoint keys");
    debug_assert_eq!(loops.iter().map(Loop::len).sum::<usize>(), TOTAL_STEPS);
    loops
}

/// All loops of one configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopDecomposition {
    loops: Vec<Loop>,
}

impl LoopDecomposition {
    /// Decomposes `config`.
    #[must_use]
    pub fn new(config: &GridConfiguration) -> Self {
        let loops = get_all_loops(config);
        debug!(loops = loops.len(), ?config, "decomposed grid");
        Self { loops }
    }

    /// Loops in discovery order; a loop's position here is its [`LoopIndex`].
    #[inline]
    #[must_use]
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    /// The loop at `index`.
    #[must_use]
    pub fn get(&self, index: LoopIndex) -> Option<&Loop> {
        self.loops.get(index)
    }

    /// Number of loops.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.loops.len()
    }

    /// Always false: every grid has at least one loop.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Iterates `(index, loop)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (LoopIndex, &Loop)> {
        self.loops.iter().enumerate()
    }

    /// Loop lengths in discovery order.
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        self.loops.iter().map(Loop::len).collect()
    }

    /// Sum of all loop lengths. Equals 64 for every configuration.
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.loops.iter().map(Loop::len).sum()
    }

    /// Loops ordered by ascending length, keeping their original index.
    ///
    /// Ties keep discovery order.
    #[must_use]
    pub fn sorted_by_length(&self) -> Vec<(LoopIndex, &Loop)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by_key(|(_, l)| l.len());
        sorted
    }

    /// Number of loops of each length.
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for l in &self.loops {
            *histogram.entry(l.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// Consumes the decomposition.
    #[must_use]
    pub fn into_loops(self) -> Vec<Loop> {
        self.loops
    }
}

impl From<&GridConfiguration> for LoopDecomposition {
    fn from(config: &GridConfiguration) -> Self {
        Self::new(config)
    }
}
