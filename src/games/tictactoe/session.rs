//! The game state machine.
//!
//! A [`GameSession`] owns the board, both players, the turn indicator and the
//! derived outcome. Invalid requests are declined without mutating anything;
//! nothing here returns an error.

use super::invariants::assert_invariants;
use super::observer::GameObserver;
use super::position::Position;
use super::rules;
use super::snapshot::{EndNotice, GameSnapshot};
use super::types::{Board, Marker, Outcome, Player, PlayerId};
use tracing::{debug, info, instrument};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DeclineReason {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The index is not on the board.
    #[display("Cell {_0} is off the board")]
    OutOfBounds(usize),
    /// The square already holds a marker.
    #[display("{_0} is already taken")]
    Occupied(Position),
}

/// What [`GameSession::apply_move`] did.
///
/// Declining is a normal result, not a failure; callers that only care about
/// re-rendering can ignore this value and read a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a move may have been declined"]
pub enum MoveDisposition {
    /// The marker was placed.
    Placed {
        /// Where it was placed.
        position: Position,
        /// The glyph placed.
        marker: Marker,
        /// Outcome after the move.
        outcome: Outcome,
    },
    /// Nothing changed.
    Declined(DeclineReason),
}

impl MoveDisposition {
    /// True if the move changed the board.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveDisposition::Placed { .. })
    }
}

/// One local game between Player X and Player O.
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    pub(super) turn: PlayerId,
    pub(super) outcome: Outcome,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("turn", &self.turn)
            .field("outcome", &self.outcome)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// Creates a session with each player's default marker.
    #[instrument]
    pub fn new() -> Self {
        Self::with_markers(PlayerId::X.default_marker(), PlayerId::O.default_marker())
    }

    /// Creates a session with the given starting markers.
    ///
    /// Markers are not checked against the offered choices, and both players
    /// may use the same glyph.
    #[instrument(skip_all, fields(x = %x_marker, o = %o_marker))]
    pub fn with_markers(x_marker: Marker, o_marker: Marker) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(PlayerId::X, x_marker),
                Player::new(PlayerId::O, o_marker),
            ],
            turn: PlayerId::X,
            outcome: Outcome::InProgress,
            observers: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose marker the next accepted move places.
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Returns the derived outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns one player.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id as usize]
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board.clone(),
            self.turn,
            self.outcome.clone(),
            self.players.clone(),
        )
    }

    /// Registers an observer for all subsequent changes.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// Places the current player's marker at `cell_index` (0-8).
    ///
    /// Declines without touching any state if the game is over, the index is
    /// off the board, or the square is taken. Otherwise the marker is placed,
    /// the turn passes to the opponent, and the outcome is recomputed.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn apply_move(&mut self, cell_index: usize) -> MoveDisposition {
        let position = match self.check_move(cell_index) {
            Ok(position) => position,
            Err(reason) => {
                debug!(%reason, "Move declined");
                return MoveDisposition::Declined(reason);
            }
        };

        let marker = self.current_player().marker().clone();
        self.board.place(position, marker.clone());
        self.turn = self.turn.opponent();

        let previous = std::mem::replace(&mut self.outcome, rules::compute_outcome(&self.board));
        debug!(%position, %marker, outcome = ?self.outcome, "Move placed");

        assert_invariants(self);
        self.notify_change();
        if !previous.is_terminal() && self.outcome.is_terminal() {
            self.notify_game_over();
        }

        MoveDisposition::Placed {
            position,
            marker,
            outcome: self.outcome.clone(),
        }
    }

    /// Preconditions for a move, in the order they are reported.
    fn check_move(&self, cell_index: usize) -> Result<Position, DeclineReason> {
        if self.outcome.is_terminal() {
            return Err(DeclineReason::GameOver);
        }
        let position =
            Position::from_index(cell_index).ok_or(DeclineReason::OutOfBounds(cell_index))?;
        if !self.board.is_empty(position) {
            return Err(DeclineReason::Occupied(position));
        }
        Ok(position)
    }

    /// Changes the glyph a player places from now on.
    ///
    /// Squares already on the board keep the glyph they were played with.
    #[instrument(skip(self, marker))]
    pub fn set_player_marker(&mut self, id: PlayerId, marker: impl Into<Marker>) {
        let marker = marker.into();
        debug!(%marker, offered = id.offers(&marker), "Marker changed");
        self.players[id as usize].set_marker(marker);
        assert_invariants(self);
        self.notify_change();
    }

    /// Like [`set_player_marker`](Self::set_player_marker), addressed by
    /// display name. Unknown names are ignored.
    #[instrument(skip(self, marker))]
    pub fn set_player_marker_by_name(&mut self, name: &str, marker: impl Into<Marker>) {
        match PlayerId::from_display_name(name) {
            Some(id) => self.set_player_marker(id, marker),
            None => debug!("Unknown player, marker change ignored"),
        }
    }

    /// Starts a new game with the same markers.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.turn = PlayerId::X;
        self.outcome = Outcome::InProgress;
        info!("Game restarted");
        assert_invariants(self);
        self.notify_change();
    }

    fn notify_change(&mut self) {
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_change(&snapshot);
        }
    }

    fn notify_game_over(&mut self) {
        let Some(notice) = EndNotice::from_outcome(&self.outcome) else {
            return;
        };
        info!(%notice, "Game over");
        for observer in &mut self.observers {
            observer.on_game_over(&notice);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        changes: usize,
        notices: Vec<EndNotice>,
    }

    #[derive(Clone, Default)]
    struct SharedRecorder(Rc<RefCell<Recorder>>);

    impl GameObserver for SharedRecorder {
        fn on_change(&mut self, _snapshot: &GameSnapshot) {
            self.0.borrow_mut().changes += 1;
        }

        fn on_game_over(&mut self, notice: &EndNotice) {
            self.0.borrow_mut().notices.push(notice.clone());
        }
    }

    fn play(session: &mut GameSession, cells: &[usize]) {
        for &cell in cells {
            assert!(session.apply_move(cell).is_placed(), "cell {cell}");
        }
    }

    #[test]
    fn test_new_session_state() {
        let session = GameSession::new();
        assert_eq!(session.turn(), PlayerId::X);
        assert_eq!(*session.outcome(), Outcome::InProgress);
        assert_eq!(session.board().filled(), 0);
        assert_eq!(session.current_player().name(), "Player X");
    }

    #[test]
    fn test_decline_reasons() {
        let mut session = GameSession::new();
        play(&mut session, &[4]);
        assert_eq!(
            session.apply_move(4),
            MoveDisposition::Declined(DeclineReason::Occupied(Position::Center))
        );
        assert_eq!(
            session.apply_move(9),
            MoveDisposition::Declined(DeclineReason::OutOfBounds(9))
        );

        play(&mut session, &[0, 3, 1, 5]);
        assert!(session.outcome().is_terminal());
        assert_eq!(
            session.apply_move(8),
            MoveDisposition::Declined(DeclineReason::GameOver)
        );
    }

    #[test]
    fn test_notice_fires_once_per_terminal_transition() {
        let recorder = SharedRecorder::default();
        let mut session = GameSession::new();
        session.subscribe(recorder.clone());

        play(&mut session, &[0, 3, 1, 4, 2]);
        let _ = session.apply_move(8);
        let _ = session.apply_move(5);
        assert_eq!(
            recorder.0.borrow().notices,
            vec![EndNotice::Winner("🩷".into())]
        );

        session.restart();
        assert_eq!(recorder.0.borrow().notices.len(), 1);

        play(&mut session, &[0, 1, 2, 3, 5, 4, 6, 8, 7]);
        assert_eq!(
            recorder.0.borrow().notices,
            vec![EndNotice::Winner("🩷".into()), EndNotice::Draw]
        );
    }

    #[test]
    fn test_change_notifications() {
        let recorder = SharedRecorder::default();
        let mut session = GameSession::new();
        session.subscribe(recorder.clone());

        play(&mut session, &[0]);
        let _ = session.apply_move(0);
        session.set_player_marker(PlayerId::O, "🐰");
        session.set_player_marker_by_name("Player Q", "🐰");
        session.restart();

        // Move, marker change, restart; the declined move and the unknown
        // player are silent.
        assert_eq!(recorder.0.borrow().changes, 3);
    }

    #[test]
    fn test_debug_omits_observer_internals() {
        let mut session = GameSession::new();
        session.subscribe(SharedRecorder::default());
        let text = format!("{session:?}");
        assert!(text.contains("observers: 1"));
    }
}
