use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use test_utils::builder::TestBuilder;

use crate::server::{config::Config, router::build_app, state::AppState};


fn test_config(vars: &[(&str, &str)]) -> Config {
    Config::from_lookup(|name| {
        if name == "DATABASE_URL" {
            return Some("sqlite::memory:".to_string());
        }
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    })
    .unwrap()
}

/// Builds the full application on an in-memory database.
async fn test_app_with(vars: &[(&str, &str)]) -> (Router, DatabaseConnection) {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let store = test.session_store().await.unwrap();
    let db = test.db.take().unwrap();

    let app = build_app(
        AppState::new(db.clone()),
        SessionManagerLayer::new(store).with_secure(false),
        &test_config(vars),
    );

    (app, db)
}

async fn test_app() -> (Router, DatabaseConnection) {
    test_app_with(&[]).await
}

fn request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extracts the `name=value` pair of the session cookie set by the response.
fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

/// Registers an account through the API and returns its session cookie and user id.
async fn register(app: &Router, email: &str, role: &str) -> (String, i64) {
    let response = send(
        app,
        json_request(
            Method::POST,
            "/api/v1/auth/register",
            json!({
                "name": "Test User",
                "email": email,
                "password": "password123",
                "role": role
            }),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let cookie = session_cookie(&response).unwrap();
    let body = read_json(response).await;

    (cookie, body["data"]["id"].as_i64().unwrap())
}
