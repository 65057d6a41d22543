//! Browser front end: an axum server rendering the game as an HTML page.
//!
//! The page is server-rendered; every control is a small form that posts
//! an action and is redirected back to `/`.

mod page;

use crate::config::HttpConfig;
use crate::error::{AppError, AppErrorKind};
use crate::session::Session;
use crate::view::GameView;
use anyhow::Result;
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use replay_tictactoe::Position;
use std::sync::{Arc, Mutex};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

/// Shared handle to the one session served by this process.
///
/// Requests are applied one at a time; the lock is never held across an
/// `.await`.
#[derive(Debug, Clone)]
pub struct WebState {
    session: Arc<Mutex<Session>>,
}

impl WebState {
    /// Wraps a session for sharing between requests.
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Runs `f` with exclusive access to the session.
    fn with_session<T>(&self, f: impl FnOnce(&mut Session) -> T) -> Result<T, AppError> {
        let mut session = self
            .session
            .lock()
            .map_err(|_| AppError::new(AppErrorKind::SessionPoisoned))?;
        Ok(f(&mut session))
    }
}

/// Builds the router for `state`.
pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/cells/{cell}", post(activate_cell))
        .route("/moves/{move_index}", post(jump_to))
        .route("/order", post(toggle_order))
        .route("/api/state", get(api_state))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}

/// Serves a fresh session on the configured address until the process exits.
#[instrument(skip_all, fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &HttpConfig, session: Session) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());
    axum::serve(listener, router(WebState::new(session))).await?;
    Ok(())
}

#[instrument(skip_all)]
async fn index(State(state): State<WebState>) -> Result<Html<String>, AppError> {
    let view = state.with_session(|session| GameView::from_session(session))?;
    Ok(Html(page::render(&view)))
}

#[instrument(skip(state))]
async fn activate_cell(
    State(state): State<WebState>,
    Path(cell): Path<usize>,
) -> Result<Redirect, AppError> {
    let pos =
        Position::from_index(cell).ok_or_else(|| AppError::new(AppErrorKind::UnknownCell(cell)))?;
    state.with_session(|session| session.activate_cell(pos))?;
    Ok(Redirect::to("/"))
}

#[instrument(skip(state))]
async fn jump_to(
    State(state): State<WebState>,
    Path(move_index): Path<usize>,
) -> Result<Redirect, AppError> {
    state.with_session(|session| session.jump_to(move_index))??;
    Ok(Redirect::to("/"))
}

#[instrument(skip_all)]
async fn toggle_order(State(state): State<WebState>) -> Result<Redirect, AppError> {
    state.with_session(Session::toggle_order)?;
    Ok(Redirect::to("/"))
}

#[instrument(skip_all)]
async fn api_state(State(state): State<WebState>) -> Result<Json<serde_json::Value>, AppError> {
    let body = state.with_session(|session| {
        serde_json::json!({
            "session": session,
            "view": GameView::from_session(session),
            "winning_line": session.game().evaluation().winning_line.map(|line| line.indices()),
        })
    })?;
    Ok(Json(body))
}

async fn health() -> &'static str {
    "ok"
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.kind {
            AppErrorKind::UnknownCell(_) | AppErrorKind::History(_) => StatusCode::NOT_FOUND,
            AppErrorKind::SessionPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(error = %self, %status, "Request failed");
        (status, self.kind.to_string()).into_response()
    }
}
