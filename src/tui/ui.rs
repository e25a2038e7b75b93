//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use emoji_tictactoe::{EndNotice, GameSnapshot, PlayerId, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::rc::Rc;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const FOOTER: &str = concat!("emoji tic-tac-toe v", env!("CARGO_PKG_VERSION"));

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());
    let snapshot = app.snapshot();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_selectors(frame, chunks[1], snapshot);
    draw_board(frame, chunks[2], snapshot, app.cursor());

    let status = Paragraph::new(snapshot.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(
        "1-9/Enter: move | x/o: change marker | r: Restart Game | q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);

    let footer = Paragraph::new(FOOTER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[5]);

    if let Some(notice) = app.notice() {
        draw_notice(frame, notice);
    }
}

/// Screen areas of the nine squares for a given terminal area.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board = center_rect(screen_chunks(area)[2], CELL_WIDTH * 3, CELL_HEIGHT * 3);
    std::array::from_fn(|i| {
        let pos = Position::ALL[i];
        Rect::new(
            board.x + pos.col() as u16 * CELL_WIDTH,
            board.y + pos.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area)
    })
}

fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Marker selectors
            Constraint::Min(CELL_HEIGHT * 3),
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
            Constraint::Length(1), // Footer
        ])
        .split(area)
}

fn draw_selectors(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (id, half) in [PlayerId::X, PlayerId::O].into_iter().zip(halves.iter()) {
        let current = snapshot.player(id).marker();
        let mut spans = Vec::new();
        for glyph in snapshot.marker_choices(id) {
            let style = if *glyph == current.glyph() {
                Style::default().bg(Color::White).fg(Color::Black)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {glyph} "), style));
        }
        // A programmatic marker outside the offered set is still shown.
        if !id.offers(current) {
            spans.push(Span::styled(
                format!(" {current} "),
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        }

        let selector = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(id.to_string()));
        frame.render_widget(selector, *half);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position) {
    let frame_area = frame.area();
    let cells = board_cells(frame_area);
    for (pos, cell) in Position::ALL.into_iter().zip(cells) {
        if cell.intersection(area).is_empty() {
            continue;
        }
        let (text, text_style) = match snapshot.board().get(pos) {
            Square::Empty => (
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Marked(marker) => (marker.to_string(), Style::default()),
        };
        let border_style = if pos == cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let square = Paragraph::new(Span::styled(text, text_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(square, cell);
    }
}

fn draw_notice(frame: &mut Frame, notice: &EndNotice) {
    let area = center_rect(frame.area(), 36, 5);
    let popup = Paragraph::new(vec![
        Line::from(notice.to_string()),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Game Over")
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
