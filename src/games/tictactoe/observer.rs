//! Change notification for presentation layers.
//!
//! A [`GameSession`](super::GameSession) calls every subscribed observer after
//! each state change, and raises an [`EndNotice`] once per transition into a
//! terminal state.

use super::snapshot::{EndNotice, GameSnapshot};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::debug;

/// Receives session notifications.
pub trait GameObserver {
    /// Called after every accepted move, marker change, and restart.
    fn on_change(&mut self, snapshot: &GameSnapshot);

    /// Called once when the game is won or drawn.
    fn on_game_over(&mut self, _notice: &EndNotice) {}
}

/// A notification forwarded by [`ChannelObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Session state changed; re-render from this snapshot.
    Changed(GameSnapshot),
    /// The game just ended.
    GameOver(EndNotice),
}

/// Forwards notifications over an mpsc channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: Sender<SessionEvent>,
}

impl ChannelObserver {
    /// Creates an observer and the receiving end of its channel.
    pub fn channel() -> (Self, Receiver<SessionEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    fn forward(&self, event: SessionEvent) {
        if self.tx.send(event).is_err() {
            debug!("Session event receiver dropped");
        }
    }
}

impl GameObserver for ChannelObserver {
    fn on_change(&mut self, snapshot: &GameSnapshot) {
        self.forward(SessionEvent::Changed(snapshot.clone()));
    }

    fn on_game_over(&mut self, notice: &EndNotice) {
        self.forward(SessionEvent::GameOver(notice.clone()));
    }
}
