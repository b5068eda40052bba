//! Property-based tests for loop decomposition.
//!
//! Random configurations are drawn as sixteen variant indices; every property
//! must hold for all of them.

use cipra::{
    advance, get_all_loops, get_endpoint_to_loop_map, trace_loop, BoundaryPoint, ColorMode,
    EndpointKey, GridConfiguration, LoopAnalysis, LoopDecomposition, Position, TileVariant,
    ENDPOINT_KEYS, TILE_COUNT, TOTAL_STEPS,
};
use proptest::prelude::*;

fn configuration() -> impl Strategy<Value = GridConfiguration> {
    prop::array::uniform16(0usize..16)
        .prop_map(|indices| GridConfiguration::from_tiles(indices.map(|i| TileVariant::ALL[i])))
}

fn position() -> impl Strategy<Value = Position> {
    (0usize..TILE_COUNT).prop_map(|i| Position::new(i).unwrap())
}

// =============================================================================
// Tile Table Properties
// =============================================================================

proptest! {
    /// connect is an involution without fixed points
    #[test]
    fn prop_connect_involution(v in 0usize..16, p in 0usize..8) {
        let variant = TileVariant::ALL[v];
        let point = BoundaryPoint::ALL[p];
        prop_assert_ne!(variant.connect(point), point);
        prop_assert_eq!(variant.connect(variant.connect(point)), point);
    }

    /// entry point is an involution onto the opposite edge
    #[test]
    fn prop_entry_point_involution(p in 0usize..8) {
        let point = BoundaryPoint::ALL[p];
        prop_assert_eq!(point.entry_point().entry_point(), point);
        prop_assert_eq!(point.entry_point().edge(), point.edge().opposite());
    }

    /// leaving through a point and re-entering through its mirror comes back
    #[test]
    fn prop_adjacency_round_trip(pos in position(), p in 0usize..8) {
        let exit = BoundaryPoint::ALL[p];
        let neighbour = pos.adjacent(exit);
        prop_assert_ne!(neighbour, pos);
        prop_assert_eq!(neighbour.adjacent(exit.entry_point()), pos);
    }
}

// =============================================================================
// Decomposition Properties
// =============================================================================

proptest! {
    /// loop lengths always sum to 64
    #[test]
    fn prop_total_length(config in configuration()) {
        let decomposition = LoopDecomposition::new(&config);
        prop_assert_eq!(decomposition.total_length(), TOTAL_STEPS);
        prop_assert!(decomposition.loops().iter().all(|l| !l.is_empty()));
    }

    /// every endpoint key belongs to exactly one loop
    #[test]
    fn prop_map_complete(config in configuration()) {
        let map = get_endpoint_to_loop_map(&config);
        prop_assert!(map.is_complete());
        prop_assert_eq!(map.len(), ENDPOINT_KEYS);
    }

    /// each loop owns exactly two keys per step
    #[test]
    fn prop_keys_per_loop(config in configuration()) {
        let decomposition = LoopDecomposition::new(&config);
        let map = get_endpoint_to_loop_map(&config);
        for (index, l) in decomposition.iter() {
            let owned = map.iter().filter(|(_, owner)| *owner == index).count();
            prop_assert_eq!(owned, 2 * l.len());
        }
    }

    /// tracing from any key reproduces the loop owning that key, rotated
    #[test]
    fn prop_trace_matches_owner(config in configuration(), k in 0usize..ENDPOINT_KEYS) {
        let key = EndpointKey::try_from(k).unwrap();
        let loops = get_all_loops(&config);
        let map = get_endpoint_to_loop_map(&config);
        let owner = &loops[map.get(key).unwrap()];

        let traced = trace_loop(&config, key.position(), key.point());
        prop_assert!(!traced.is_empty());
        prop_assert_eq!(traced.len(), owner.len());
        prop_assert_eq!(traced[0], key.position());
    }

    /// stepping is a bijection on endpoint keys
    #[test]
    fn prop_advance_bijective(config in configuration()) {
        let mut seen = 0u128;
        for key in EndpointKey::all() {
            let (_, next) = advance(&config, key);
            prop_assert_eq!(seen & next.bit(), 0);
            seen |= next.bit();
        }
        prop_assert_eq!(seen, u128::MAX);
    }

    /// decomposition is deterministic
    #[test]
    fn prop_deterministic(config in configuration()) {
        prop_assert_eq!(get_all_loops(&config), get_all_loops(&config));
    }
}

// =============================================================================
// Move Properties
// =============================================================================

proptest! {
    /// swapping twice restores the configuration
    #[test]
    fn prop_swap_involution(config in configuration(), a in position(), b in position()) {
        prop_assert_eq!(config.swapped(a, b).swapped(a, b), config);
    }

    /// a swap keeps the multiset of variants
    #[test]
    fn prop_swap_preserves_tiles(config in configuration(), a in position(), b in position()) {
        let mut before = config.to_indices();
        let mut after = config.swapped(a, b).to_indices();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    /// the loop list is sorted and covers every loop once
    #[test]
    fn prop_summary_sorted(config in configuration()) {
        let summary = LoopAnalysis::new(config).summary(ColorMode::ByLoop);
        let lengths = summary.lengths();
        prop_assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
        let mut indices: Vec<usize> = summary.loops.iter().map(|e| e.index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..summary.loop_count).collect::<Vec<_>>());
    }
}
