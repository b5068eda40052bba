//! `cipra-loops`: decomposes Cipra Loops grids and reports their loops.
//!
//! **Usage:**
//! ```text
//! cipra-loops [--tiles <list>] [--config <file>] [--color-mode <mode>] [--json] [-v] <command>
//!
//!   loops              Loop list, shortest first
//!   map                Owning loop of every strand
//!   tile <variant>     Label and strands of one variant
//!   swap <a> <b>       Swap two positions, then list loops
//!   shuffle [--seed N] Shuffle the grid, then list moves and loops
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use cipra::{ColorMode, GridConfiguration, LoopAnalysis, Position, TileMove, TileVariant};
use cipra_clients::{
    grid_text, loops_text, map_report, map_text, MoveReport, Overrides, PuzzleFile, Settings,
    TileReport,
};
use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Decompose Cipra Loops grids into loops.
#[derive(Parser)]
#[command(name = "cipra-loops", version, about = "Cipra Loops decomposition reports")]
struct Cli {
    /// Sixteen variant indices, separated by commas or spaces.
    #[arg(long, global = true)]
    tiles: Option<GridConfiguration>,

    /// TOML file with `tiles`, `color_mode` and `seed`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Loop colour scheme: by-length or by-loop.
    #[arg(long, global = true)]
    color_mode: Option<ColorMode>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log more (repeat for debug and trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List loops, shortest first.
    Loops,
    /// Show the owning loop of every strand.
    Map,
    /// Describe one tile variant.
    Tile {
        /// Variant index in 0..16.
        variant: usize,
    },
    /// Swap the tiles at two positions.
    Swap {
        /// First position in 0..16.
        a: usize,
        /// Second position in 0..16.
        b: usize,
    },
    /// Shuffle the grid.
    Shuffle {
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let file = cli.config.as_deref().map(PuzzleFile::load).transpose()?;
    let seed = match &cli.command {
        Commands::Shuffle { seed } => *seed,
        _ => None,
    };
    let settings = Settings::resolve(
        file,
        Overrides {
            tiles: cli.tiles,
            color_mode: cli.color_mode,
            seed,
        },
    );
    info!(config = ?settings.configuration, mode = %settings.color_mode, "resolved settings");

    match cli.command {
        Commands::Loops => {
            let analysis = LoopAnalysis::new(settings.configuration);
            let summary = analysis.summary(settings.color_mode);
            if cli.json {
                emit_json(&summary)?;
            } else {
                print!("{}", grid_text(analysis.config()));
                print!("{}", loops_text(&summary));
            }
        }
        Commands::Map => {
            let analysis = LoopAnalysis::new(settings.configuration);
            let tiles = map_report(&analysis);
            if cli.json {
                emit_json(&tiles)?;
            } else {
                print!("{}", map_text(&tiles));
            }
        }
        Commands::Tile { variant } => {
            let variant = TileVariant::new(variant).context("invalid tile variant")?;
            let report = TileReport::new(variant);
            if cli.json {
                emit_json(&report)?;
            } else {
                print!("{}", report.text());
            }
        }
        Commands::Swap { a, b } => {
            let a = Position::new(a).context("invalid first position")?;
            let b = Position::new(b).context("invalid second position")?;
            let configuration = settings.configuration.swapped(a, b);
            let moves = if a == b {
                Vec::new()
            } else {
                vec![TileMove { from: a, to: b }, TileMove { from: b, to: a }]
            };
            info!(%a, %b, "swapped tiles");
            emit_move(
                MoveReport::new(configuration, moves, settings.color_mode),
                cli.json,
            )?;
        }
        Commands::Shuffle { .. } => {
            let shuffle = match settings.seed {
                Some(seed) => settings
                    .configuration
                    .shuffled(&mut StdRng::seed_from_u64(seed)),
                None => settings.configuration.shuffled(&mut rand::rng()),
            };
            info!(moved = shuffle.moves.len(), seed = ?settings.seed, "shuffled grid");
            emit_move(
                MoveReport::new(shuffle.configuration, shuffle.moves, settings.color_mode),
                cli.json,
            )?;
        }
    }

    Ok(())
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}

fn emit_move(report: MoveReport, json: bool) -> Result<()> {
    if json {
        emit_json(&report)
    } else {
        print!("{}", report.text());
        Ok(())
    }
}
