//! Application state and input handling.

use super::input;
use super::ui;
use crossterm::event::KeyCode;
use emoji_tictactoe::{
    ChannelObserver, EndNotice, GameSession, GameSnapshot, PlayerId, Position, SessionEvent,
    Settings,
};
use ratatui::layout::Rect;
use std::sync::mpsc::Receiver;
use tracing::debug;

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// The app never reads the session directly when rendering; it re-renders
/// from the latest snapshot delivered by its observer.
pub struct App {
    session: GameSession,
    events: Receiver<SessionEvent>,
    snapshot: GameSnapshot,
    cursor: Position,
    notice: Option<EndNotice>,
    viewport: Rect,
}

impl App {
    /// Creates an application with the configured starting markers.
    pub fn new(settings: &Settings) -> Self {
        let mut session = GameSession::with_markers(
            settings.player_x_marker().clone(),
            settings.player_o_marker().clone(),
        );
        let (observer, events) = ChannelObserver::channel();
        session.subscribe(observer);
        let snapshot = session.snapshot();

        Self {
            session,
            events,
            snapshot,
            cursor: Position::Center,
            notice: None,
            viewport: Rect::default(),
        }
    }

    /// Latest state delivered by the session.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Square the keyboard cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// End-of-game notice awaiting dismissal.
    pub fn notice(&self) -> Option<&EndNotice> {
        self.notice.as_ref()
    }

    /// Records the area last drawn into, for mouse hit-testing.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, code: KeyCode) -> Flow {
        // The notice is modal: nothing else happens until it is dismissed.
        if self.notice.is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                debug!("Notice dismissed");
                self.notice = None;
            }
            return Flow::Continue;
        }

        match code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r' | 'R') => self.session.restart(),
            KeyCode::Char('x' | 'X') => self.cycle_marker(PlayerId::X),
            KeyCode::Char('o' | 'O') => self.cycle_marker(PlayerId::O),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = input::digit_position(c) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
        self.drain_events();
        Flow::Continue
    }

    /// Handles a left click at a screen coordinate.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if self.notice.is_some() {
            return;
        }
        let cells = ui::board_cells(self.viewport);
        if let Some(pos) = input::hit_test(&cells, column, row) {
            self.cursor = pos;
            self.place(pos);
            self.drain_events();
        }
    }

    /// Applies pending session notifications.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                SessionEvent::Changed(snapshot) => self.snapshot = snapshot,
                SessionEvent::GameOver(notice) => {
                    debug!(%notice, "Raising end-of-game notice");
                    self.notice = Some(notice);
                }
            }
        }
    }

    fn place(&mut self, pos: Position) {
        let disposition = self.session.apply_move(pos.to_index());
        debug!(?disposition, "Move requested");
    }

    fn cycle_marker(&mut self, id: PlayerId) {
        let next = id.next_marker(self.session.player(id).marker());
        self.session.set_player_marker(id, next);
    }
}
