//! Application error types.

use derive_more::{Display, Error};
use replay_tictactoe::HistoryError;

/// What went wrong while serving a request.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppErrorKind {
    /// The requested cell does not exist.
    #[display("Unknown cell: {_0}")]
    UnknownCell(usize),
    /// The requested move does not exist.
    #[display("{_0}")]
    History(HistoryError),
    /// A previous request panicked while holding the session.
    #[display("Session state is unavailable")]
    SessionPoisoned,
}

/// Application error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct AppError {
    /// Error kind.
    pub kind: AppErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AppError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(kind: AppErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<HistoryError> for AppError {
    #[track_caller]
    fn from(err: HistoryError) -> Self {
        Self::new(AppErrorKind::History(err))
    }
}
