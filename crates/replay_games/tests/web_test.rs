//! End-to-end tests for the browser front end.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use replay_games::web::{WebState, router};
use replay_games::{MoveOrder, Session};
use serde_json::Value;
use tower::ServiceExt;

fn app(order: MoveOrder) -> Router {
    router(WebState::new(Session::new(order)))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

async fn state(app: &Router) -> Value {
    let (status, body) = send(app, Method::GET, "/api/state").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).expect("state is json")
}

#[tokio::test]
async fn test_health() {
    let app = app(MoveOrder::Ascending);
    let (status, body) = send(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_index_renders_empty_board() {
    let app = app(MoveOrder::Ascending);
    let (status, body) = send(&app, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Next player: X"));
    assert!(body.contains("Go to game start"));
    assert!(body.contains("action=\"/cells/0\""));
}

#[tokio::test]
async fn test_cell_post_redirects_and_places_mark() {
    let app = app(MoveOrder::Ascending);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/cells/4")
        .body(Body::empty())
        .expect("valid request");
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).map(|v| v.as_bytes()),
        Some(&b"/"[..])
    );

    let state = state(&app).await;
    assert_eq!(state["view"]["status"], "Next player: O");
    assert_eq!(state["session"]["game"]["current_move"], 1);
    assert_eq!(state["view"]["cells"][4]["square"]["Occupied"], "X");
}

#[tokio::test]
async fn test_unknown_cell_and_move_are_not_found() {
    let app = app(MoveOrder::Ascending);
    let (status, body) = send(&app, Method::POST, "/cells/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Unknown cell: 9"));

    let (status, body) = send(&app, Method::POST, "/moves/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("99"));

    let state = state(&app).await;
    assert_eq!(state["session"]["game"]["current_move"], 0);
}

#[tokio::test]
async fn test_order_toggle() {
    let app = app(MoveOrder::Ascending);
    send(&app, Method::POST, "/cells/0").await;
    let (status, _) = send(&app, Method::POST, "/order").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let state = state(&app).await;
    assert_eq!(state["view"]["order"], "descending");
    assert_eq!(state["view"]["toggle_label"], "Ascending");
    assert_eq!(state["view"]["moves"][0]["move_number"], 1);
}

#[tokio::test]
async fn test_win_then_time_travel() {
    let app = app(MoveOrder::Ascending);
    for cell in [4, 0, 1, 3, 7] {
        send(&app, Method::POST, &format!("/cells/{cell}")).await;
    }
    let state_after_win = state(&app).await;
    assert_eq!(state_after_win["view"]["status"], "Winner: X");
    assert_eq!(state_after_win["view"]["game_over"], true);
    assert_eq!(state_after_win["winning_line"], serde_json::json!([1, 4, 7]));

    // Further clicks on the won board are ignored.
    send(&app, Method::POST, "/cells/8").await;
    assert_eq!(state(&app).await["session"]["game"]["history"].as_array().map(Vec::len), Some(6));

    let (status, _) = send(&app, Method::POST, "/moves/2").await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    send(&app, Method::POST, "/cells/8").await;

    let state = state(&app).await;
    assert_eq!(state["session"]["game"]["current_move"], 3);
    assert_eq!(state["session"]["game"]["history"].as_array().map(Vec::len), Some(4));
    assert_eq!(state["view"]["status"], "Next player: O");
    assert!(state["winning_line"].is_null());
}

#[tokio::test]
async fn test_cells_are_addressed_by_index_only() {
    let app = app(MoveOrder::Ascending);
    let (status, _) = send(&app, Method::POST, "/cells/center").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let state = state(&app).await;
    assert_eq!(state["session"]["game"]["history"].as_array().map(Vec::len), Some(1));
}
