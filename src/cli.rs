//! Command-line interface for emoji_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Emoji Tic-Tac-Toe - two players, nine squares, your choice of glyph
#[derive(Parser, Debug)]
#[command(name = "emoji_tictactoe")]
#[command(about = "Tic-tac-toe with selectable emoji markers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the settings file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Apply a sequence of moves without a UI and print the result
    Replay {
        /// Path to the settings file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Override Player X's marker
        #[arg(long)]
        x_marker: Option<String>,

        /// Override Player O's marker
        #[arg(long)]
        o_marker: Option<String>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Cells to play in order (0-8), alternating X and O
        cells: Vec<usize>,
    },

    /// List the marker choices for each player
    Markers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "emoji_tictactoe",
            "replay",
            "--x-marker",
            "👑",
            "--json",
            "0",
            "3",
            "1",
        ])
        .unwrap();
        match cli.command {
            Command::Replay {
                x_marker,
                o_marker,
                json,
                cells,
                ..
            } => {
                assert_eq!(x_marker.as_deref(), Some("👑"));
                assert_eq!(o_marker, None);
                assert!(json);
                assert_eq!(cells, vec![0, 3, 1]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_play_default_config() {
        let cli = Cli::try_parse_from(["emoji_tictactoe", "play"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Play { config } if config == PathBuf::from("tictactoe.toml")
        ));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
