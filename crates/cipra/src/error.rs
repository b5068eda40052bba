//! Error types for the loop engine.
//!
//! The engine is total over well-formed input. Every error here is an input
//! error raised at a constructor; nothing is retryable.

use thiserror::Error;

/// Root error type for all engine failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipraError {
    /// A grid configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationFault),

    /// A grid position outside `0..16`.
    #[error("position {0} is outside the 4x4 grid")]
    PositionOutOfRange(usize),

    /// A boundary point outside `0..8`.
    #[error("boundary point {0} is outside 0..8")]
    BoundaryPointOutOfRange(usize),

    /// A tile variant outside `0..16`.
    #[error("tile variant {0} is outside 0..16")]
    VariantOutOfRange(usize),

    /// A colour mode name that is neither `by-length` nor `by-loop`.
    #[error("unknown colour mode '{0}' (expected by-length or by-loop)")]
    UnknownColorMode(String),
}

/// Why a grid configuration was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationFault {
    /// The configuration does not hold exactly one variant per position.
    #[error("expected 16 tiles, got {actual}")]
    WrongLength {
        /// Number of values supplied.
        actual: usize,
    },

    /// A value does not name a tile variant.
    #[error("value {value} at position {position} is not a tile variant in 0..16")]
    VariantOutOfRange {
        /// Position of the offending value.
        position: usize,
        /// The offending value.
        value: i64,
    },

    /// A token in a textual configuration is not an integer.
    #[error("'{token}' at position {position} is not an integer")]
    NotAnInteger {
        /// Position of the offending token.
        position: usize,
        /// The offending token.
        token: String,
    },
}

/// Result alias used throughout the crate.
pub type CipraResult<T> = Result<T, CipraError>;
