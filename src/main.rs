//! Emoji Tic-Tac-Toe - unified CLI

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use emoji_tictactoe::{GameSession, Marker, MoveDisposition, PlayerId, Settings};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(&config),
        Command::Replay {
            config,
            x_marker,
            o_marker,
            json,
            cells,
        } => run_replay(&config, x_marker, o_marker, json, &cells),
        Command::Markers => {
            print_markers();
            Ok(())
        }
    }
}

/// Run the terminal UI
fn run_play(config: &Path) -> Result<()> {
    let settings = Settings::load_or_default(config)?;
    tui::run_tui(&settings)
}

/// Play `cells` headlessly and print the final board
#[instrument(skip_all, fields(config = %config.display(), moves = cells.len()))]
fn run_replay(
    config: &Path,
    x_marker: Option<String>,
    o_marker: Option<String>,
    json: bool,
    cells: &[usize],
) -> Result<()> {
    let settings = Settings::load_or_default(config)?;
    initialize_stderr_tracing(settings.log_filter());

    let x_marker = x_marker.map_or_else(|| settings.player_x_marker().clone(), Marker::from);
    let o_marker = o_marker.map_or_else(|| settings.player_o_marker().clone(), Marker::from);
    let mut session = GameSession::with_markers(x_marker, o_marker);

    for &cell in cells {
        if let MoveDisposition::Declined(reason) = session.apply_move(cell) {
            warn!(cell, %reason, "Move declined");
        }
    }

    let snapshot = session.snapshot();
    info!(outcome = ?snapshot.outcome(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}\n\n{}", snapshot.board().display(), snapshot.status_line());
    }
    Ok(())
}

fn print_markers() {
    for id in PlayerId::iter() {
        println!("{}: {}", id, id.marker_choices().join(" "));
    }
}

fn initialize_stderr_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
