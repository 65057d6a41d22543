//! Terminal application state and key handling.

use super::input;
use crate::session::Session;
use crate::view::GameView;
use crossterm::event::KeyCode;
use replay_tictactoe::Position;
use tracing::{debug, instrument};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
}

impl App {
    /// Creates the application around a fresh session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move number highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
            .min(self.session.game().history().len().saturating_sub(1))
    }

    /// Presentation model of the current frame.
    pub fn view(&self) -> GameView {
        GameView::from_session(&self.session)
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected_move = self.session.game().current_move();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('s') => self.session.toggle_order(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = input::digit_cell(key) {
                    self.cursor = pos;
                    self.session.activate_cell(pos);
                }
            }
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        Flow::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.activate_cell(self.cursor);
            }
            key => self.cursor = input::move_cursor(self.cursor, key),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let view = self.view();
        let moves = view.moves();
        let Some(row) = moves.iter().position(|m| *m.move_number() == self.selected_move()) else {
            return;
        };
        match key {
            KeyCode::Up => {
                self.selected_move = *moves[row.saturating_sub(1)].move_number();
            }
            KeyCode::Down => {
                self.selected_move = *moves[(row + 1).min(moves.len() - 1)].move_number();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let target = self.selected_move();
                if let Err(e) = self.session.jump_to(target) {
                    debug!(error = %e, "Jump ignored");
                }
            }
            _ => {}
        }
    }
}
