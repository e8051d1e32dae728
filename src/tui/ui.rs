//! Board, status line, and leaderboard rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::game::{Board, GameStatus, Mark, Square};

use super::app::App;

/// Draws the full frame: status line, board, leaderboard, key hints.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(11),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_status(f, chunks[0], app);
    render_board(f, chunks[1], app);
    render_leaderboard(f, chunks[2], app);
    render_hints(f, chunks[3]);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = match app.game().status() {
        GameStatus::NextTurn(mark) => format!("Next player: {mark}"),
        GameStatus::Won(mark) => format!("Winner: {mark}"),
        GameStatus::Draw => "Draw".to_string(),
    };
    let paragraph = Paragraph::new(status)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], app, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], app, 6);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    render_cell(f, cols[0], app.game().board(), start, app.cursor());
    render_vertical_sep(f, cols[1]);
    render_cell(f, cols[2], app.game().board(), start + 1, app.cursor());
    render_vertical_sep(f, cols[3]);
    render_cell(f, cols[4], app.game().board(), start + 2, app.cursor());
}

fn render_cell(f: &mut Frame, area: Rect, board: &Board, pos: usize, cursor: usize) {
    let (text, mut style) = match board.get(pos) {
        Some(Square::Occupied(Mark::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Mark::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (" ".to_string(), Style::default().fg(Color::DarkGray)),
    };
    if pos == cursor {
        style = style.bg(Color::DarkGray);
    }
    let cell = Paragraph::new(format!("\n{text}"))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(cell, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn render_leaderboard(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .standings()
        .iter()
        .map(|entry| ListItem::new(format!("{}: {} wins", entry.player(), entry.wins())))
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Leaderboard"));
    f.render_widget(list, area);
}

fn render_hints(f: &mut Frame, area: Rect) {
    let hints = Paragraph::new("arrows: move  enter/space: place  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hints, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
