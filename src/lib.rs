//! Emoji tic-tac-toe.
//!
//! A two-player, single-session tic-tac-toe game in which each player picks
//! the glyph they place on the board.
//!
//! # Architecture
//!
//! - **Session**: [`GameSession`] is the state machine. It applies moves,
//!   recomputes the [`Outcome`] after each one, and restarts.
//! - **Rules**: [`compute_outcome`] is a pure function over a [`Board`].
//! - **Observers**: presentation layers subscribe a [`GameObserver`] and
//!   re-render from a [`GameSnapshot`]; an [`EndNotice`] fires once per
//!   finished game.
//! - **Settings**: [`Settings`] supplies starting markers and log options.
//!
//! # Example
//!
//! ```
//! use emoji_tictactoe::{GameSession, Marker, Outcome};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     let _ = session.apply_move(cell);
//! }
//! assert_eq!(*session.outcome(), Outcome::Won(Marker::from("🩷")));
//! assert_eq!(session.snapshot().status_line(), "Winner: 🩷");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod games;
mod settings;

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, ChannelObserver, DeclineReason, EndNotice, GameObserver, GameSession, GameSnapshot,
    Marker, MoveDisposition, Outcome, Player, PlayerId, Position, SessionEvent, Square,
    compute_outcome,
};
