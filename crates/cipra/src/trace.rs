//! Following one ribbon strand around the torus.
//!
//! A single step takes an endpoint key, crosses the tile to the joined point,
//! leaves through that point into the neighbour and lands on the mirrored
//! entry point:
//!
//! ```text
//! (position, entry) --connect--> exit --adjacent--> position'
//!                                     --entry_point--> entry'
//! ```
//!
//! The step is a bijection on the 128 endpoint keys. Iterating a bijection
//! from any key returns to that same key first, so every walk is a closed
//! cycle and terminates.

use core::iter::FusedIterator;

use crate::constants::TOTAL_STEPS;
use crate::grid::{EndpointKey, GridConfiguration, Position};
use crate::tile::{BoundaryPoint, Strand};

/// One tile visit along a loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// The tile visited.
    pub position: Position,
    /// Point the ribbon entered through.
    pub entry: BoundaryPoint,
    /// Point the ribbon left through.
    pub exit: BoundaryPoint,
}

impl Step {
    /// Key of the entry end.
    #[inline]
    #[must_use]
    pub const fn entry_key(&self) -> EndpointKey {
        EndpointKey::new(self.position, self.entry)
    }

    /// Key of the exit end.
    #[inline]
    #[must_use]
    pub const fn exit_key(&self) -> EndpointKey {
        EndpointKey::new(self.position, self.exit)
    }

    /// The strand this step runs along.
    #[must_use]
    pub fn strand(&self, config: &GridConfiguration) -> Strand {
        config.variant_at(self.position).strand_through(self.entry)
    }
}

/// Crosses the tile at `key` and moves into the neighbour.
///
/// Returns the step taken and the key the ribbon arrives at.
#[inline]
#[must_use]
pub fn advance(config: &GridConfiguration, key: EndpointKey) -> (Step, EndpointKey) {
    let position = key.position();
    let entry = key.point();
    let exit = config.variant_at(position).connect(entry);
    let next = EndpointKey::new(position.adjacent(exit), exit.entry_point());
    (
        Step {
            position,
            entry,
            exit,
        },
        next,
    )
}

/// Iterator over the steps of the loop through a starting key.
///
/// Yields at least one step and stops just before the start key would be
/// visited again.
#[derive(Clone, Debug)]
pub struct LoopWalk<'a> {
    config: &'a GridConfiguration,
    start: EndpointKey,
    next: Option<EndpointKey>,
    taken: usize,
}

impl Iterator for LoopWalk<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let key = self.next?;
        let (step, following) = advance(self.config, key);
        self.taken += 1;
        debug_assert!(self.taken <= TOTAL_STEPS, "walk did not close");
        self.next = (following != self.start).then_some(following);
        Some(step)
    }
}

impl FusedIterator for LoopWalk<'_> {}

/// Walks the loop through `start`.
#[must_use]
pub fn walk(config: &GridConfiguration, start: EndpointKey) -> LoopWalk<'_> {
    LoopWalk {
        config,
        start,
        next: Some(start),
        taken: 0,
    }
}

/// Positions visited following the strand from `(start_position, start_point)`
/// until it returns to that endpoint.
///
/// The result is never empty and a tile may appear more than once when the
/// loop crosses it along different strands.
#[must_use]
pub fn trace_loop(
    config: &GridConfiguration,
    start_position: Position,
    start_point: BoundaryPoint,
) -> Vec<Position> {
    walk(config, EndpointKey::new(start_position, start_point))
        .map(|step| step.position)
        .collect()
}
