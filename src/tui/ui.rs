//! Rendering for the game screen.

use super::app::App;
use crate::game::{Board, GameResult, Player, Square};
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Colors for one theme.
struct Palette {
    background: Color,
    text: Color,
    dim: Color,
    x_mark: Color,
    o_mark: Color,
    win: Color,
    cursor: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                dim: Color::DarkGray,
                x_mark: Color::Blue,
                o_mark: Color::Red,
                win: Color::Green,
                cursor: Color::Gray,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                dim: Color::DarkGray,
                x_mark: Color::LightBlue,
                o_mark: Color::LightRed,
                win: Color::LightGreen,
                cursor: Color::DarkGray,
            },
        }
    }
}

/// Renders the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let controller = app.controller();
    let palette = Palette::for_theme(controller.theme());

    let base = Style::default().bg(palette.background).fg(palette.text);
    frame.render_widget(Block::default().style(base), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts")
        .style(base.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let result = controller.result();
    render_board(
        frame,
        chunks[1],
        controller.board(),
        *app.cursor(),
        result,
        &palette,
    );

    let status = Paragraph::new(status_line(result, controller.to_move()))
        .style(base)
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[2]);

    let scores = controller.scores();
    let tally = format!(
        "X wins: {}   O wins: {}   Draws: {}",
        scores.x_wins, scores.o_wins, scores.draws
    );
    let scores = Paragraph::new(tally)
        .style(base)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scores"));
    frame.render_widget(scores, chunks[3]);

    let help = Paragraph::new("←↑↓→: Move | Enter/Space: Place | r: Reset | t: Theme | q: Quit")
        .style(Style::default().bg(palette.background).fg(palette.dim))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);
}

fn status_line(result: GameResult, to_move: Player) -> String {
    match result {
        GameResult::InProgress => format!("In progress. Player {} to move.", to_move),
        GameResult::Won { winner, .. } => {
            format!("Game over. Player {} wins! Press r for a new game.", winner)
        }
        GameResult::Draw => "Game over. Draw! Press r for a new game.".to_string(),
    }
}

/// Renders the 3x3 board.
fn render_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: usize,
    result: GameResult,
    palette: &Palette,
) {
    let board_area = center_rect(area, 40, 11);
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

    render_row(frame, rows[0], board, 0, cursor, result, palette);
    render_separator(frame, rows[1], palette);
    render_row(frame, rows[2], board, 3, cursor, result, palette);
    render_separator(frame, rows[3], palette);
    render_row(frame, rows[4], board, 6, cursor, result, palette);
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    start: usize,
    cursor: usize,
    result: GameResult,
    palette: &Palette,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(frame, cols[0], board, start, cursor, result, palette);
    render_vertical_sep(frame, cols[1], palette);
    render_square(frame, cols[2], board, start + 1, cursor, result, palette);
    render_vertical_sep(frame, cols[3], palette);
    render_square(frame, cols[4], board, start + 2, cursor, result, palette);
}

fn render_square(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    index: usize,
    cursor: usize,
    result: GameResult,
    palette: &Palette,
) {
    let on_winning_line = matches!(result, GameResult::Won { line, .. } if line.contains(&index));

    let (text, mut style) = match board.get(index) {
        Some(Square::Occupied(Player::X)) => (
            "X",
            Style::default()
                .fg(palette.x_mark)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            "O",
            Style::default()
                .fg(palette.o_mark)
                .add_modifier(Modifier::BOLD),
        ),
        _ => ("·", Style::default().fg(palette.dim)),
    };

    if on_winning_line {
        style = style.fg(palette.win);
    }
    if index == cursor && !result.is_over() {
        style = style.bg(palette.cursor);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(palette.dim));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(palette.dim))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
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
