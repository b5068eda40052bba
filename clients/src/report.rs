//! Text and JSON reports for the `cipra-loops` subcommands.

use std::fmt::Write as _;

use cipra::{
    BoundaryPoint, ColorMode, GridConfiguration, LoopAnalysis, LoopSummary, Position, TileMove,
    TileVariant, GRID_SIZE,
};
use serde::Serialize;

/// Loop list as text: one line per loop, shortest first.
#[must_use]
pub fn loops_text(summary: &LoopSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} loops, {} steps (colour {})",
        summary.loop_count, summary.total_length, summary.color_mode
    );
    for entry in &summary.loops {
        let _ = writeln!(
            out,
            "  loop {:>2}: length {:>2}, {:>2} tiles, from {:<5} {}",
            entry.index,
            entry.length,
            entry.distinct_tiles,
            entry.start.to_string(),
            entry.color
        );
    }
    out
}

/// The grid, four rows of variant indices.
#[must_use]
pub fn grid_text(config: &GridConfiguration) -> String {
    format!("{config}\n")
}

/// Owning loop of each strand, per tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLoops {
    /// Grid position.
    pub position: Position,
    /// Variant at that position.
    pub variant: TileVariant,
    /// Loop index of each strand, in strand order.
    pub loops: Vec<Option<usize>>,
}

/// Strand ownership for all sixteen tiles, row-major.
#[must_use]
pub fn map_report(analysis: &LoopAnalysis) -> Vec<TileLoops> {
    Position::all()
        .map(|position| {
            let variant = analysis.config().variant_at(position);
            let loops = variant
                .strands()
                .iter()
                .map(|s| analysis.endpoint_map().loop_at(position, s.low()))
                .collect();
            TileLoops {
                position,
                variant,
                loops,
            }
        })
        .collect()
}

/// Strand ownership as a 4x4 text grid.
#[must_use]
pub fn map_text(tiles: &[TileLoops]) -> String {
    let mut out = String::new();
    for row in tiles.chunks(GRID_SIZE) {
        let cells: Vec<String> = row
            .iter()
            .map(|tile| {
                let owners: Vec<String> = tile
                    .loops
                    .iter()
                    .map(|owner| owner.map_or_else(|| "-".to_string(), |i| i.to_string()))
                    .collect();
                format!("{:>11}", owners.join(","))
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" |"));
    }
    out
}

/// One tile variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileReport {
    /// Variant index.
    pub variant: TileVariant,
    /// Binary label.
    pub label: String,
    /// Strands as `[low, high]` boundary points.
    pub strands: Vec<[BoundaryPoint; 2]>,
}

impl TileReport {
    /// Describes `variant`.
    #[must_use]
    pub fn new(variant: TileVariant) -> Self {
        Self {
            variant,
            label: variant.label(),
            strands: variant
                .strands()
                .iter()
                .map(|s| [s.low(), s.high()])
                .collect(),
        }
    }

    /// Text form.
    #[must_use]
    pub fn text(&self) -> String {
        let strands: Vec<String> = self
            .strands
            .iter()
            .map(|[low, high]| format!("{low}-{high}"))
            .collect();
        format!(
            "variant {} ({}): {}\n",
            self.variant,
            self.label,
            strands.join(" ")
        )
    }
}

/// Result of a move: the new grid, the tiles that moved and the loops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// The grid after the move.
    pub configuration: GridConfiguration,
    /// Tiles that changed position.
    pub moves: Vec<TileMove>,
    /// Loops of the new grid.
    pub summary: LoopSummary,
}

impl MoveReport {
    /// Analyses `configuration` after `moves`.
    #[must_use]
    pub fn new(configuration: GridConfiguration, moves: Vec<TileMove>, mode: ColorMode) -> Self {
        let summary = LoopAnalysis::new(configuration).summary(mode);
        Self {
            configuration,
            moves,
            summary,
        }
    }

    /// Text form.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for m in &self.moves {
            let _ = writeln!(out, "moved {:>2} -> {:>2}", m.from.index(), m.to.index());
        }
        out.push_str(&grid_text(&self.configuration));
        out.push_str(&loops_text(&self.summary));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loops_text_identity() {
        let summary = LoopAnalysis::new(GridConfiguration::identity()).summary(ColorMode::ByLength);
        let text = loops_text(&summary);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "4 loops, 64 steps (colour by-length)");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("length 16"));
        assert!(lines[1].ends_with("#ec4899"));
    }

    #[test]
    fn test_map_report_uniform() {
        let analysis = LoopAnalysis::new(GridConfiguration::uniform(TileVariant::default()));
        let tiles = map_report(&analysis);
        assert_eq!(tiles.len(), 16);
        // Position 0 carries the first strand of four different loops.
        assert_eq!(tiles[0].loops, vec![Some(0), Some(1), Some(2), Some(3)]);
        assert!(tiles.iter().all(|t| t.loops.iter().all(Option::is_some)));
        assert_eq!(map_text(&tiles).lines().count(), 4);
    }

    #[test]
    fn test_tile_report() {
        let report = TileReport::new(TileVariant::default());
        assert_eq!(report.label, "0000");
        assert_eq!(report.text(), "variant 0 (0000): 0-1 2-3 4-5 6-7\n");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strands"][0], serde_json::json!([0, 1]));
    }

    #[test]
    fn test_move_report() {
        let config = GridConfiguration::identity().swapped(Position::ZERO, Position::MAX);
        let moves = vec![
            TileMove {
                from: Position::ZERO,
                to: Position::MAX,
            },
            TileMove {
                from: Position::MAX,
                to: Position::ZERO,
            },
        ];
        let report = MoveReport::new(config, moves, ColorMode::ByLength);
        assert_eq!(report.summary.lengths(), vec![12, 52]);
        let text = report.text();
        assert!(text.starts_with("moved  0 -> 15\nmoved 15 ->  0\n15  1  2  3\n"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["configuration"][0], 15);
        assert_eq!(json["moves"][0]["to"], 15);
    }
}
