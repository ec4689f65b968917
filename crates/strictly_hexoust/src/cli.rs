//! Command-line interface for hexoust.

use clap::{Parser, Subcommand};
use strictly_hexoust::{HexCoordinate, Stone};

/// HexOust - hexagonal capture game rules engine
#[derive(Parser, Debug)]
#[command(name = "hexoust")]
#[command(about = "Replay HexOust moves and inspect the resulting board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a sequence of moves from the starting position
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Board radius (overrides config)
        #[arg(short, long)]
        radius: Option<u32>,

        /// Color that moves first (overrides config)
        #[arg(short, long)]
        first: Option<Stone>,

        /// Print the final snapshot as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Moves as q,r,s triples, played in order
        #[arg(allow_hyphen_values = true)]
        moves: Vec<HexCoordinate>,
    },

    /// List the cells of a hexagon board
    Cells {
        /// Board radius
        #[arg(short, long, default_value = "6")]
        radius: u32,
    },
}
