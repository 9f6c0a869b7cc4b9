//! Shared wiring for route tests: process environment, a fresh in-memory
//! database per test, and the router under test mounted at `/api`.

use api::auth::generate_jwt;
use api::routes::routes;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use db::models::user;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::env;
use std::sync::Once;
use util::state::AppState;

static ENV: Once = Once::new();

fn ensure_env() {
    ENV.call_once(|| {
        // SAFETY: runs once, before any test thread reads these variables.
        unsafe {
            env::set_var("JWT_SECRET", "test_secret_for_route_tests");
            env::set_var("JWT_DURATION_MINUTES", "60");
        }
    });
}

/// Builds the full application router on top of a private in-memory
/// database. The connection is returned alongside so tests can seed rows
/// and inspect state directly.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    ensure_env();

    let db = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(db.clone());
    let app = Router::new().nest("/api", routes(app_state));

    (app, db)
}

/// `Authorization` header value for a seeded user.
pub fn bearer(user: &user::Model) -> String {
    let (token, _) = generate_jwt(user);
    format!("Bearer {token}")
}

pub fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn delete(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    json_request("POST", uri, auth, body)
}

pub fn put_json(uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    json_request("PUT", uri, auth, body)
}

fn json_request(method: &str, uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Splits a response into its status and parsed JSON body.
pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("response body was not JSON ({e}): {bytes:?}"));
    (status, json)
}
