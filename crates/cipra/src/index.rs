//! Endpoint-to-loop ownership, used for colouring and highlighting.
//!
//! Each loop carries the key it was traced from, so the map walks every loop
//! once from that key and records the loop index on both ends of each step.
//! No start point is searched for.

use crate::constants::{ENDPOINT_KEYS, STRANDS_PER_TILE};
use crate::decompose::{get_all_loops, Loop, LoopIndex};
use crate::grid::{EndpointKey, GridConfiguration, Position};
use crate::tile::BoundaryPoint;

/// Dense table from endpoint key to owning loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointLoopMap {
    slots: [Option<u8>; ENDPOINT_KEYS],
}

impl EndpointLoopMap {
    /// Builds the map for `loops`, which must come from `config`.
    #[must_use]
    pub fn build(config: &GridConfiguration, loops: &[Loop]) -> Self {
        let mut slots = [None; ENDPOINT_KEYS];
        for (index, l) in loops.iter().enumerate() {
            // At most 64 loops.
            let tag = index as u8;
            for step in l.steps(config) {
                slots[step.entry_key().index()] = Some(tag);
                slots[step.exit_key().index()] = Some(tag);
            }
        }
        Self { slots }
    }

    /// Loop owning `key`.
    #[inline]
    #[must_use]
    pub fn get(&self, key: EndpointKey) -> Option<LoopIndex> {
        self.slots[key.index()].map(usize::from)
    }

    /// Loop owning the ribbon end at `(position, point)`.
    #[inline]
    #[must_use]
    pub fn loop_at(&self, position: Position, point: BoundaryPoint) -> Option<LoopIndex> {
        self.get(EndpointKey::new(position, point))
    }

    /// True when every endpoint key has an owner.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of keys with an owner.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True when no key has an owner.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates owned keys with their loop, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (EndpointKey, LoopIndex)> + '_ {
        EndpointKey::all().filter_map(|key| self.get(key).map(|index| (key, index)))
    }
}

/// Decomposes `config` and maps every endpoint key to its loop.
#[must_use]
pub fn get_endpoint_to_loop_map(config: &GridConfiguration) -> EndpointLoopMap {
    EndpointLoopMap::build(config, &get_all_loops(config))
}

/// How many of the four strands of the tile at `position` belong to `loop_index`.
///
/// Drives the UI's path-density shading for a highlighted loop.
#[must_use]
pub fn highlighted_strand_count(
    config: &GridConfiguration,
    map: &EndpointLoopMap,
    position: Position,
    loop_index: LoopIndex,
) -> usize {
    let count = config
        .variant_at(position)
        .strands()
        .iter()
        .filter(|strand| map.loop_at(position, strand.low()) == Some(loop_index))
        .count();
    debug_assert!(count <= STRANDS_PER_TILE);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::LoopDecomposition;
    use crate::tile::TileVariant;

    #[test]
    fn test_map_complete() {
        for config in [
            GridConfiguration::identity(),
            GridConfiguration::uniform(TileVariant::default()),
        ] {
            let map = get_endpoint_to_loop_map(&config);
            assert!(map.is_complete());
            assert_eq!(map.len(), ENDPOINT_KEYS);
            assert!(!map.is_empty());
        }
    }

    #[test]
    fn test_strand_ends_share_loop() {
        let config = GridConfiguration::identity();
        let map = get_endpoint_to_loop_map(&config);
        for position in Position::all() {
            for strand in config.variant_at(position).strands() {
                let (low, high) = strand.endpoints();
                assert_eq!(map.loop_at(position, low), map.loop_at(position, high));
            }
        }
    }

    #[test]
    fn test_start_keys_map_to_own_loop() {
        let config = GridConfiguration::identity();
        let loops = get_all_loops(&config);
        let map = EndpointLoopMap::build(&config, &loops);
        for (index, l) in loops.iter().enumerate() {
            assert_eq!(map.get(l.start()), Some(index));
        }
    }

    #[test]
    fn test_key_counts_match_lengths() {
        let config = GridConfiguration::identity();
        let decomposition = LoopDecomposition::new(&config);
        let map = EndpointLoopMap::build(&config, decomposition.loops());
        for (index, l) in decomposition.iter() {
            let owned = map.iter().filter(|(_, owner)| *owner == index).count();
            assert_eq!(owned, 2 * l.len());
        }
    }

    #[test]
    fn test_highlighted_strand_count() {
        // Uniform variant 0: every tile carries four strands on four different
        // loops of length 4.
        let config = GridConfiguration::uniform(TileVariant::default());
        let map = get_endpoint_to_loop_map(&config);
        let owner = map.loop_at(Position::ZERO, BoundaryPoint::new(0).unwrap()).unwrap();
        assert_eq!(highlighted_strand_count(&config, &map, Position::ZERO, owner), 1);

        let total: usize = Position::all()
            .map(|p| highlighted_strand_count(&config, &map, p, owner))
            .sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_highlight_counts_sum_to_length() {
        let config = GridConfiguration::identity();
        let decomposition = LoopDecomposition::new(&config);
        let map = EndpointLoopMap::build(&config, decomposition.loops());
        for (index, l) in decomposition.iter() {
            let total: usize = Position::all()
                .map(|p| highlighted_strand_count(&config, &map, p, index))
                .sum();
            assert_eq!(total, l.len());
        }
    }
}
