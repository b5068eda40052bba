//! Puzzle settings: TOML file, command-line overrides, defaults.
//!
//! Flags override the file and the file overrides the defaults (identity
//! configuration, colour by length, no seed).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cipra::{ColorMode, GridConfiguration};
use serde::Deserialize;
use tracing::debug;

/// Contents of a puzzle configuration file.
///
/// ```toml
/// tiles = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
/// color_mode = "by-loop"
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleFile {
    /// Sixteen variant indices, row-major.
    pub tiles: Option<GridConfiguration>,
    /// Colour scheme for the loop list.
    pub color_mode: Option<ColorMode>,
    /// Seed for `shuffle`.
    pub seed: Option<u64>,
}

impl PuzzleFile {
    /// Parses TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not valid TOML, has unknown keys or
    /// holds an invalid configuration.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse puzzle configuration")
    }

    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let file = Self::parse(&text).with_context(|| format!("in {}", path.display()))?;
        debug!(path = %path.display(), ?file, "loaded puzzle file");
        Ok(file)
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--tiles`.
    pub tiles: Option<GridConfiguration>,
    /// `--color-mode`.
    pub color_mode: Option<ColorMode>,
    /// `--seed`.
    pub seed: Option<u64>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Grid to analyse.
    pub configuration: GridConfiguration,
    /// Colour scheme.
    pub color_mode: ColorMode,
    /// Shuffle seed; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Settings {
    /// Merges `overrides` over `file` over the defaults.
    #[must_use]
    pub fn resolve(file: Option<PuzzleFile>, overrides: Overrides) -> Self {
        let file = file.unwrap_or_default();
        Self {
            configuration: overrides
                .tiles
                .or(file.tiles)
                .unwrap_or_else(GridConfiguration::identity),
            color_mode: overrides.color_mode.or(file.color_mode).unwrap_or_default(),
            seed: overrides.seed.or(file.seed),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(None, Overrides::default())
    }
}
