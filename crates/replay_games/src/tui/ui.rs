//! Stateless UI rendering for the terminal front end.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use replay_tictactoe::{Player, Square};

use super::app::{App, Focus};
use crate::view::{CellView, GameView};

/// Renders one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, body[0], &view, app);
    draw_moves(frame, body[1], &view, app);

    let status_style = if *view.game_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status().as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "arrows: move  enter: play/jump  1-9: play cell  tab: switch panel  s: sort  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
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

    for (row, cells) in view.cells().chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], cells, app);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView], app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, cell) in cells.iter().enumerate() {
        let cursor = app.focus() == Focus::Board && app.cursor() == *cell.position();
        draw_cell(frame, cols[col * 2], cell, cursor);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: bool) {
    let symbol = format!(" {} ", cell.symbol());
    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, cell_style(cell, cursor))))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Winning cells keep their yellow background under the cursor.
fn cell_style(cell: &CellView, cursor: bool) -> Style {
    let base_style = match cell.square() {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        }
        Square::Occupied(Player::O) => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
    };

    match (cursor, *cell.highlighted()) {
        (true, true) => base_style
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
        (true, false) => base_style.bg(Color::White).fg(Color::Black),
        (false, true) => base_style.bg(Color::Yellow).fg(Color::Black),
        (false, false) => base_style,
    }
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let selected = app.selected_move();
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let mut style = if entry.is_jump_target() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            if app.focus() == Focus::Moves && *entry.move_number() == selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(entry.description().clone(), style)))
        })
        .collect();

    let title = format!("Moves (s: {})", view.toggle_label());
    let border_style = if app.focus() == Focus::Moves {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
