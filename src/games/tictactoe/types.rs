//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A glyph placed on the board to identify a player's squares.
///
/// Glyphs are strings rather than `char`s because several of the offered
/// emoji are multi-codepoint sequences.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct Marker(String);

impl Marker {
    /// Creates a marker from any glyph.
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    /// Returns the glyph.
    pub fn glyph(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Marker {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}

/// Identity of one of the two seats at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum PlayerId {
    /// Moves first.
    #[strum(to_string = "Player X")]
    X,
    /// Moves second.
    #[strum(to_string = "Player O")]
    O,
}

impl PlayerId {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::X => PlayerId::O,
            PlayerId::O => PlayerId::X,
        }
    }

    /// Resolves a display name ("Player X", "Player O") to an identity.
    #[instrument]
    pub fn from_display_name(name: &str) -> Option<Self> {
        PlayerId::iter().find(|id| id.to_string() == name)
    }

    /// Glyphs offered to this player by the marker selector.
    pub fn marker_choices(self) -> &'static [&'static str] {
        match self {
            PlayerId::X => &["🩷", "🐷", "🌷", "👑"],
            PlayerId::O => &["🩶", "🐰", "🌪️", "💍"],
        }
    }

    /// The marker a player starts with.
    pub fn default_marker(self) -> Marker {
        Marker::from(self.marker_choices()[0])
    }

    /// Whether `marker` is one of this player's offered glyphs.
    pub fn offers(self, marker: &Marker) -> bool {
        self.marker_choices().contains(&marker.glyph())
    }

    /// Returns the offered glyph following `current`, wrapping around.
    ///
    /// A glyph outside the offered set cycles back to the first choice.
    pub fn next_marker(self, current: &Marker) -> Marker {
        let choices = self.marker_choices();
        let next = choices
            .iter()
            .position(|glyph| *glyph == current.glyph())
            .map_or(0, |i| (i + 1) % choices.len());
        Marker::from(choices[next])
    }
}

/// A player: a fixed identity and a changeable marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Seat identity.
    id: PlayerId,
    /// Glyph placed by this player's next moves.
    marker: Marker,
}

impl Player {
    /// Display name, e.g. "Player X".
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    pub(super) fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding the glyph that was current when it was played.
    Marked(Marker),
}

impl Square {
    /// Returns the marker, if any.
    pub fn marker(&self) -> Option<&Marker> {
        match self {
            Square::Empty => None,
            Square::Marked(marker) => Some(marker),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> &Square {
        &self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        *self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Marks a square. Only the session writes to its board.
    pub(crate) fn place(&mut self, pos: Position, marker: Marker) {
        self.squares[pos.to_index()] = Square::Marked(marker);
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the text doubles as a move
    /// prompt.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match &self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Marked(marker) => marker.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Derived result of the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still accepted.
    InProgress,
    /// A line was completed with this marker.
    Won(Marker),
    /// Every square is filled and no line was completed.
    Draw,
}

impl Outcome {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
