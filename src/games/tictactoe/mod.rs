//! Tic-tac-toe with per-player marker glyphs.

mod invariants;
mod observer;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use invariants::{
    DerivedOutcomeInvariant, Invariant, InvariantSet, InvariantViolation, SessionInvariants,
    TurnParityInvariant,
};
pub use observer::{ChannelObserver, GameObserver, SessionEvent};
pub use position::Position;
pub use rules::compute_outcome;
pub use session::{DeclineReason, GameSession, MoveDisposition};
pub use snapshot::{EndNotice, GameSnapshot};
pub use types::{Board, Marker, Outcome, Player, PlayerId, Square};
