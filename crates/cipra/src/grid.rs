//! The 4x4 toroidal grid: positions, endpoint keys and configurations.
//!
//! Positions are row-major (`position = row * 4 + col`). The grid has
//! toroidal topology, so leaving any edge re-enters from the opposite one.

use core::fmt;
use core::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{BOUNDARY_POINTS, ENDPOINT_KEYS, GRID_SIZE, TILE_COUNT};
use crate::error::{CipraError, CipraResult, ConfigurationFault};
use crate::tile::{BoundaryPoint, TileVariant};

// ============================================================================
// Position
// ============================================================================

/// A cell address on the toroidal grid.
///
/// # Example
///
/// ```
/// use cipra::grid::Position;
///
/// let p = Position::from_row_col(1, 1);
/// assert_eq!(p.index(), 5);
///
/// // Wrap-around behavior
/// assert_eq!(Position::ZERO.offset(0, -1).index(), 3);
/// assert_eq!(Position::ZERO.offset(-1, 0).index(), 12);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "usize", into = "usize")
)]
#[repr(transparent)]
pub struct Position(u8);

impl Position {
    /// Top-left cell (index 0).
    pub const ZERO: Self = Self(0);

    /// Bottom-right cell (index 15).
    pub const MAX: Self = Self((TILE_COUNT - 1) as u8);

    /// Creates a position, rejecting indices outside `0..16`.
    ///
    /// # Errors
    ///
    /// Returns [`CipraError::PositionOutOfRange`] for `index >= 16`.
    pub fn new(index: usize) -> CipraResult<Self> {
        if index < TILE_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(CipraError::PositionOutOfRange(index))
        }
    }

    /// Creates a position from row and column, each wrapping modulo 4.
    #[inline]
    #[must_use]
    pub const fn from_row_col(row: usize, col: usize) -> Self {
        Self(((row % GRID_SIZE) * GRID_SIZE + col % GRID_SIZE) as u8)
    }

    /// Returns the position index in `0..16`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row, counted from the top.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / GRID_SIZE
    }

    /// Column, counted from the left.
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % GRID_SIZE
    }

    /// Moves by the given row and column deltas, wrapping on both axes.
    #[inline]
    #[must_use]
    pub const fn offset(self, drow: isize, dcol: isize) -> Self {
        let size = GRID_SIZE as isize;
        let row = (self.row() as isize + drow).rem_euclid(size);
        let col = (self.col() as isize + dcol).rem_euclid(size);
        Self::from_row_col(row as usize, col as usize)
    }

    /// The neighbour reached by leaving this cell through `exit`.
    ///
    /// Points 0 and 7 move left, 1 and 2 down, 3 and 4 right, 5 and 6 up.
    #[inline]
    #[must_use]
    pub const fn adjacent(self, exit: BoundaryPoint) -> Self {
        let (drow, dcol) = exit.edge().step();
        self.offset(drow, dcol)
    }

    /// Iterates all sixteen positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TILE_COUNT as u8).map(Self)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Position {
    type Error = CipraError;

    fn try_from(index: usize) -> CipraResult<Self> {
        Self::new(index)
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> Self {
        position.index()
    }
}

/// The neighbour of `position` across the edge holding `exit`.
#[inline]
#[must_use]
pub const fn adjacent_position(position: Position, exit: BoundaryPoint) -> Position {
    position.adjacent(exit)
}

// ============================================================================
// EndpointKey
// ============================================================================

/// One ribbon end on one tile: a (position, boundary point) pair.
///
/// Packed densely as `position * 8 + point`, so the 128 keys index flat
/// tables and fit a `u128` bitset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "usize", into = "usize")
)]
#[repr(transparent)]
pub struct EndpointKey(u8);

impl EndpointKey {
    /// Packs a position and boundary point.
    #[inline]
    #[must_use]
    pub const fn new(position: Position, point: BoundaryPoint) -> Self {
        Self((position.index() * BOUNDARY_POINTS + point.index()) as u8)
    }

    /// Dense index in `0..128`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The grid position.
    #[inline]
    #[must_use]
    pub const fn position(self) -> Position {
        Position((self.0 as usize / BOUNDARY_POINTS) as u8)
    }

    /// The boundary point on that position's tile.
    #[inline]
    #[must_use]
    pub const fn point(self) -> BoundaryPoint {
        BoundaryPoint::from_table((self.0 as usize % BOUNDARY_POINTS) as u8)
    }

    /// Single-bit mask for a `u128` visited set.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u128 {
        1u128 << self.0
    }

    /// Iterates all 128 keys, position-major.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ENDPOINT_KEYS as u8).map(Self)
    }
}

impl TryFrom<usize> for EndpointKey {
    type Error = CipraError;

    fn try_from(index: usize) -> CipraResult<Self> {
        let position = Position::new(index / BOUNDARY_POINTS)?;
        let point = BoundaryPoint::new(index % BOUNDARY_POINTS)?;
        Ok(Self::new(position, point))
    }
}

impl From<EndpointKey> for usize {
    fn from(key: EndpointKey) -> Self {
        key.index()
    }
}

impl fmt::Debug for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EndpointKey({}:{})", self.position(), self.point())
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.position(), self.point())
    }
}

// ============================================================================
// GridConfiguration
// ============================================================================

/// Sixteen tile variants, one per position, row-major.
///
/// The only input the engine consumes. It is a plain value: moves return a
/// new configuration and nothing in the engine mutates one.
///
/// # Example
///
/// ```
/// use cipra::grid::GridConfiguration;
///
/// let config: GridConfiguration = "0 0 0 0, 0 0 0 0, 0 0 0 0, 0 0 0 0".parse().unwrap();
/// assert_eq!(config, GridConfiguration::uniform(Default::default()));
///
/// assert!(GridConfiguration::new(&[0u8; 15]).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<i64>")
)]
pub struct GridConfiguration {
    tiles: [TileVariant; TILE_COUNT],
}

impl GridConfiguration {
    /// Validates raw values into a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CipraError::InvalidConfiguration`] when `values` does not
    /// hold exactly 16 entries or an entry lies outside `0..16`.
    pub fn new<T>(values: &[T]) -> CipraResult<Self>
    where
        T: Copy + Into<i64>,
    {
        if values.len() != TILE_COUNT {
            return Err(ConfigurationFault::WrongLength {
                actual: values.len(),
            }
            .into());
        }
        let mut tiles = [TileVariant::default(); TILE_COUNT];
        for (position, (slot, &value)) in tiles.iter_mut().zip(values).enumerate() {
            let value: i64 = value.into();
            *slot = usize::try_from(value)
                .ok()
                .and_then(|index| TileVariant::new(index).ok())
                .ok_or(ConfigurationFault::VariantOutOfRange { position, value })?;
        }
        Ok(Self { tiles })
    }

    /// Wraps already-validated variants.
    #[inline]
    #[must_use]
    pub const fn from_tiles(tiles: [TileVariant; TILE_COUNT]) -> Self {
        Self { tiles }
    }

    /// The starting layout: variant `i` at position `i`.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            tiles: TileVariant::ALL,
        }
    }

    /// Every position holds `variant`.
    #[must_use]
    pub const fn uniform(variant: TileVariant) -> Self {
        Self {
            tiles: [variant; TILE_COUNT],
        }
    }

    /// The variant at `position`.
    #[inline]
    #[must_use]
    pub const fn variant_at(&self, position: Position) -> TileVariant {
        self.tiles[position.index()]
    }

    /// All variants, row-major.
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[TileVariant; TILE_COUNT] {
        &self.tiles
    }

    /// Raw variant indices, row-major.
    #[must_use]
    pub fn to_indices(&self) -> Vec<usize> {
        self.tiles.iter().map(|v| v.index()).collect()
    }

    /// Returns a copy with the tiles at `a` and `b` exchanged.
    ///
    /// Swapping a position with itself returns an equal configuration.
    #[must_use]
    pub fn swapped(&self, a: Position, b: Position) -> Self {
        let mut tiles = self.tiles;
        tiles.swap(a.index(), b.index());
        Self { tiles }
    }

    /// Shuffles the tiles with `rng`.
    ///
    /// Positions are permuted, not variant values, and the identity
    /// permutation is redrawn, so at least one tile always moves even when
    /// every tile shows the same variant.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Shuffle {
        let identity: [usize; TILE_COUNT] = core::array::from_fn(|i| i);
        let mut source = identity;
        while source == identity {
            source.shuffle(rng);
        }

        let tiles = source.map(|from| self.tiles[from]);
        let mut moves: Vec<TileMove> = source
            .iter()
            .enumerate()
            .filter(|(to, from)| to != *from)
            .map(|(to, &from)| TileMove {
                from: Position(from as u8),
                to: Position(to as u8),
            })
            .collect();
        moves.sort_by_key(|m| m.from);

        Shuffle {
            configuration: Self { tiles },
            moves,
        }
    }
}

impl Default for GridConfiguration {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for GridConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tiles.iter().map(|v| v.index())).finish()
    }
}

/// Four rows of variant indices.
impl fmt::Display for GridConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.tiles.chunks(GRID_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, variant) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>2}", variant.index())?;
            }
        }
        Ok(())
    }
}

/// Parses integers separated by commas and/or whitespace.
impl FromStr for GridConfiguration {
    type Err = CipraError;

    fn from_str(s: &str) -> CipraResult<Self> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(position, token)| {
                token
                    .parse::<i64>()
                    .map_err(|_| ConfigurationFault::NotAnInteger {
                        position,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<i64>, _>>()?;
        Self::new(&values)
    }
}

impl TryFrom<Vec<i64>> for GridConfiguration {
    type Error = CipraError;

    fn try_from(values: Vec<i64>) -> CipraResult<Self> {
        Self::new(&values)
    }
}

impl From<GridConfiguration> for Vec<i64> {
    fn from(config: GridConfiguration) -> Self {
        config.tiles.iter().map(|v| v.index() as i64).collect()
    }
}

// ============================================================================
// Moves
// ============================================================================

/// A tile that changed position during a shuffle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileMove {
    /// Where the tile was.
    pub from: Position,
    /// Where it landed.
    pub to: Position,
}

/// Result of [`GridConfiguration::shuffled`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shuffle {
    /// The shuffled grid.
    pub configuration: GridConfiguration,
    /// Every tile that moved, ordered by its old position. Never empty.
    pub moves: Vec<TileMove>,
}
