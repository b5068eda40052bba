//! Precomputed tile tables for O(1) connectivity lookups.
//!
//! A tile carries four ribbon strands. Each strand joins two of the eight
//! boundary points, numbered counter-clockwise from the bottom-left:
//!
//! ```text
//!          6     5
//!       +-----------+
//!    7  |           |  4
//!       |           |
//!    0  |           |  3
//!       +-----------+
//!          1     2
//! ```
//!
//! # Tables Provided
//!
//! - **Connections (16 x 8)**: `CONNECTIONS[v][p]` is the point joined to `p`
//!   inside variant `v`. Every row is a fixed-point-free involution.
//! - **Strands (16 x 4)**: the four strands of each variant, lower endpoint
//!   first, in the order a scan of points `0..8` discovers them.
//! - **Entry points (8)**: `ENTRY_POINTS[e]` is the point a ribbon enters the
//!   neighbouring tile through after leaving through `e`.
//!
//! All tables are evaluated at compile time. A malformed construction row is a
//! build failure, not a runtime error.
//!
//! # Example
//!
//! ```
//! use cipra::tile::{BoundaryPoint, TileVariant};
//!
//! let variant = TileVariant::new(0).unwrap();
//! let six = BoundaryPoint::new(6).unwrap();
//! assert_eq!(variant.connect(six).index(), 7);
//! assert_eq!(six.entry_point().index(), 1);
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{BOUNDARY_POINTS, STRANDS_PER_TILE, VARIANT_COUNT};
use crate::error::{CipraError, CipraResult};

// ============================================================================
// Construction
// ============================================================================

/// Partners of points 6 (top-left), 5 (top-right) and 1 (bottom-left) for
/// each variant. The fourth strand is forced.
const VARIANT_PAIRINGS: [[u8; 3]; VARIANT_COUNT] = [
    [7, 4, 0],
    [7, 4, 3],
    [7, 3, 0],
    [7, 3, 4],
    [4, 7, 0],
    [4, 7, 3],
    [3, 7, 0],
    [3, 7, 4],
    [0, 4, 7],
    [0, 4, 3],
    [0, 3, 7],
    [0, 3, 4],
    [4, 0, 7],
    [4, 0, 3],
    [3, 0, 7],
    [3, 0, 4],
];

const UNASSIGNED: u8 = u8::MAX;

const fn join(mut connects: [u8; BOUNDARY_POINTS], a: u8, b: u8) -> [u8; BOUNDARY_POINTS] {
    assert!(a != b, "a strand must join two distinct points");
    assert!(
        connects[a as usize] == UNASSIGNED && connects[b as usize] == UNASSIGNED,
        "boundary point joined twice"
    );
    connects[a as usize] = b;
    connects[b as usize] = a;
    connects
}

const fn build_connections(pairing: [u8; 3]) -> [u8; BOUNDARY_POINTS] {
    let top_left = pairing[0];
    let top_right = pairing[1];
    let bottom_left = pairing[2];

    let mut connects = [UNASSIGNED; BOUNDARY_POINTS];
    connects = join(connects, 6, top_left);
    connects = join(connects, 5, top_right);
    connects = join(connects, 1, bottom_left);

    // Points sum to 28. The two left over sum to 28 - 12 - (tl + tr + bl)
    // and one of them is 2.
    let partner = 14 - (top_left as i32 + top_right as i32 + bottom_left as i32);
    assert!(
        partner >= 0 && partner < BOUNDARY_POINTS as i32,
        "fourth partner out of range"
    );
    join(connects, 2, partner as u8)
}

const CONNECTION_TABLE: [[u8; BOUNDARY_POINTS]; VARIANT_COUNT] = {
    let mut table = [[0u8; BOUNDARY_POINTS]; VARIANT_COUNT];
    let mut v = 0;
    while v < VARIANT_COUNT {
        table[v] = build_connections(VARIANT_PAIRINGS[v]);
        v += 1;
    }
    table
};

const STRAND_TABLE: [[[u8; 2]; STRANDS_PER_TILE]; VARIANT_COUNT] = {
    let mut table = [[[0u8; 2]; STRANDS_PER_TILE]; VARIANT_COUNT];
    let mut v = 0;
    while v < VARIANT_COUNT {
        let mut seen = [false; BOUNDARY_POINTS];
        let mut found = 0;
        let mut p = 0;
        while p < BOUNDARY_POINTS {
            if !seen[p] {
                let q = CONNECTION_TABLE[v][p] as usize;
                seen[p] = true;
                seen[q] = true;
                table[v][found] = [p as u8, q as u8];
                found += 1;
            }
            p += 1;
        }
        assert!(found == STRANDS_PER_TILE, "tile must carry four strands");
        v += 1;
    }
    table
};

const ENTRY_TABLE: [u8; BOUNDARY_POINTS] = [3, 6, 5, 0, 7, 2, 1, 4];

// ============================================================================
// Tables
// ============================================================================

/// Precomputed connectivity for every variant.
///
/// `CONNECTIONS[v][p]` = the boundary point joined to `p` inside variant `v`.
/// Size: 128 bytes.
pub static CONNECTIONS: [[u8; BOUNDARY_POINTS]; VARIANT_COUNT] = CONNECTION_TABLE;

/// Precomputed strand list for every variant.
///
/// `STRANDS[v][i]` = `[low, high]` endpoints of the i-th strand of variant `v`.
pub static STRANDS: [[[u8; 2]; STRANDS_PER_TILE]; VARIANT_COUNT] = STRAND_TABLE;

/// Exit point to entry point on the neighbouring tile.
///
/// Mirrors across the shared edge: leaving through the lower left point (0)
/// enters the left neighbour through its lower right point (3), and so on.
/// The table is an involution and does not depend on the grid size.
pub static ENTRY_POINTS: [u8; BOUNDARY_POINTS] = ENTRY_TABLE;

// ============================================================================
// Edge
// ============================================================================

/// A side of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Points 0 and 7.
    Left,
    /// Points 1 and 2.
    Bottom,
    /// Points 3 and 4.
    Right,
    /// Points 5 and 6.
    Top,
}

impl Edge {
    /// Row and column deltas for crossing this edge into the neighbour.
    #[inline]
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Left => (0, -1),
            Self::Bottom => (1, 0),
            Self::Right => (0, 1),
            Self::Top => (-1, 0),
        }
    }

    /// The neighbour's edge that shares this one.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Bottom => Self::Top,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
        }
    }
}

// ============================================================================
// BoundaryPoint
// ============================================================================

/// One of the eight connection points around a tile.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "usize", into = "usize")
)]
#[repr(transparent)]
pub struct BoundaryPoint(u8);

impl BoundaryPoint {
    /// All boundary points in counter-clockwise order.
    pub const ALL: [Self; BOUNDARY_POINTS] = {
        let mut all = [Self(0); BOUNDARY_POINTS];
        let mut p = 0;
        while p < BOUNDARY_POINTS {
            all[p] = Self(p as u8);
            p += 1;
        }
        all
    };

    /// Creates a boundary point, rejecting indices outside `0..8`.
    ///
    /// # Errors
    ///
    /// Returns [`CipraError::BoundaryPointOutOfRange`] for `index >= 8`.
    pub fn new(index: usize) -> CipraResult<Self> {
        if index < BOUNDARY_POINTS {
            Ok(Self(index as u8))
        } else {
            Err(CipraError::BoundaryPointOutOfRange(index))
        }
    }

    /// Builds a point from a table entry known to be in range.
    #[inline]
    pub(crate) const fn from_table(value: u8) -> Self {
        debug_assert!((value as usize) < BOUNDARY_POINTS);
        Self(value)
    }

    /// Returns the point index in `0..8`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The edge this point sits on.
    #[inline]
    #[must_use]
    pub const fn edge(self) -> Edge {
        match self.0 {
            0 | 7 => Edge::Left,
            1 | 2 => Edge::Bottom,
            3 | 4 => Edge::Right,
            _ => Edge::Top,
        }
    }

    /// The point a ribbon leaving through `self` enters the neighbour by.
    #[inline]
    #[must_use]
    pub const fn entry_point(self) -> Self {
        Self(ENTRY_TABLE[self.0 as usize])
    }
}

impl fmt::Debug for BoundaryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundaryPoint({})", self.0)
    }
}

impl fmt::Display for BoundaryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for BoundaryPoint {
    type Error = CipraError;

    fn try_from(index: usize) -> CipraResult<Self> {
        Self::new(index)
    }
}

impl From<BoundaryPoint> for usize {
    fn from(point: BoundaryPoint) -> Self {
        point.index()
    }
}

/// Maps an exit point to the entry point on the neighbouring tile.
#[inline]
#[must_use]
pub const fn entry_point(exit: BoundaryPoint) -> BoundaryPoint {
    exit.entry_point()
}

// ============================================================================
// Strand
// ============================================================================

/// A ribbon strand: two boundary points joined inside one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Strand {
    low: BoundaryPoint,
    high: BoundaryPoint,
}

impl Strand {
    /// The endpoints, lower index first.
    ///
    /// The renderer keys a strand's colour by its first endpoint.
    #[inline]
    #[must_use]
    pub const fn endpoints(self) -> (BoundaryPoint, BoundaryPoint) {
        (self.low, self.high)
    }

    /// Lower endpoint.
    #[inline]
    #[must_use]
    pub const fn low(self) -> BoundaryPoint {
        self.low
    }

    /// Higher endpoint.
    #[inline]
    #[must_use]
    pub const fn high(self) -> BoundaryPoint {
        self.high
    }

    /// Returns true if `point` is one of the two endpoints.
    #[inline]
    #[must_use]
    pub fn contains(self, point: BoundaryPoint) -> bool {
        self.low == point || self.high == point
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

// ============================================================================
// TileVariant
// ============================================================================

/// One of the sixteen ribbon-crossing patterns a grid cell can show.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "usize", into = "usize")
)]
#[repr(transparent)]
pub struct TileVariant(u8);

impl TileVariant {
    /// All variants in index order.
    pub const ALL: [Self; VARIANT_COUNT] = {
        let mut all = [Self(0); VARIANT_COUNT];
        let mut v = 0;
        while v < VARIANT_COUNT {
            all[v] = Self(v as u8);
            v += 1;
        }
        all
    };

    /// Creates a variant, rejecting indices outside `0..16`.
    ///
    /// # Errors
    ///
    /// Returns [`CipraError::VariantOutOfRange`] for `index >= 16`.
    pub fn new(index: usize) -> CipraResult<Self> {
        if index < VARIANT_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(CipraError::VariantOutOfRange(index))
        }
    }

    /// Returns the variant index in `0..16`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// O(1) lookup of the point joined to `point` inside this tile.
    #[inline]
    #[must_use]
    pub const fn connect(self, point: BoundaryPoint) -> BoundaryPoint {
        BoundaryPoint::from_table(CONNECTION_TABLE[self.0 as usize][point.0 as usize])
    }

    /// The full connectivity map of this tile, indexed by boundary point.
    #[must_use]
    pub fn connectivity(self) -> [BoundaryPoint; BOUNDARY_POINTS] {
        CONNECTIONS[self.index()].map(BoundaryPoint::from_table)
    }

    /// The four strands of this tile, lower endpoint first.
    #[must_use]
    pub fn strands(self) -> [Strand; STRANDS_PER_TILE] {
        STRANDS[self.index()].map(|[low, high]| Strand {
            low: BoundaryPoint::from_table(low),
            high: BoundaryPoint::from_table(high),
        })
    }

    /// The strand passing through `point`.
    #[must_use]
    pub fn strand_through(self, point: BoundaryPoint) -> Strand {
        let other = self.connect(point);
        Strand {
            low: point.min(other),
            high: point.max(other),
        }
    }

    /// Four-digit binary label (`0000` to `1111`).
    #[must_use]
    pub fn label(self) -> String {
        format!("{:04b}", self.0)
    }
}

impl fmt::Debug for TileVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileVariant({})", self.0)
    }
}

impl fmt::Display for TileVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for TileVariant {
    type Error = CipraError;

    fn try_from(index: usize) -> CipraResult<Self> {
        Self::new(index)
    }
}

impl From<TileVariant> for usize {
    fn from(variant: TileVariant) -> Self {
        variant.index()
    }
}

/// The connectivity map of `variant`.
#[inline]
#[must_use]
pub fn connectivity(variant: TileVariant) -> [BoundaryPoint; BOUNDARY_POINTS] {
    variant.connectivity()
}
