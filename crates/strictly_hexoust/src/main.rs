//! HexOust - command-line driver
//!
//! Replays moves through the rules engine and prints the result.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_hexoust::{GameConfig, HexCoordinate, Stone, layout};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            radius,
            first,
            json,
            moves,
        } => play(config, radius, first, json, moves),
        Command::Cells { radius } => cells(radius),
    }
}

/// Replays `moves` and prints every result followed by the final board.
#[instrument(skip(moves), fields(moves = moves.len()))]
fn play(
    config: Option<PathBuf>,
    radius: Option<u32>,
    first: Option<Stone>,
    json: bool,
    moves: Vec<HexCoordinate>,
) -> Result<()> {
    let mut game = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(radius) = radius {
        game = game.with_radius(radius);
    }
    if let Some(first) = first {
        game = game.with_first_mover(first);
    }

    let mut engine = game.build_engine()?;
    info!(cells = engine.grid().len(), "Board ready");

    for (turn, coordinate) in moves.into_iter().enumerate() {
        let mover = engine
            .current_turn()
            .mover()
            .map_or_else(|| "-".to_string(), |stone| stone.to_string());
        let result = engine.submit_move(coordinate);
        if !result.is_accepted() {
            warn!(%coordinate, %result, "Move refused");
        }
        println!("{:>3}. {:<4} {}: {}", turn + 1, mover, coordinate, result);
    }

    let snapshot = engine.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", snapshot.render());
        println!("{}", snapshot.turn());
    }
    Ok(())
}

/// Prints the coordinates of a hexagon board, one per line.
#[instrument]
fn cells(radius: u32) -> Result<()> {
    for coordinate in layout::hexagon(radius)? {
        println!("{},{},{}", coordinate.q(), coordinate.r(), coordinate.s());
    }
    Ok(())
}
