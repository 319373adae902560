//! Shared helpers for HTTP-level integration tests.
//!
//! Tests exercise the real router (including the full middleware stack)
//! via `tower::ServiceExt::oneshot`, so no TCP listener is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use refugio_api::auth::jwt::{generate_access_token, AuthConfig};
use refugio_api::config::ServerConfig;
use refugio_api::router::build_app_router;
use refugio_api::state::AppState;

/// Signing secret shared by the test config and [`auth_header`].
pub const TEST_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: AuthConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. No notifier is configured, matching the default
/// deployment.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        notifier: None,
    };
    build_app_router(state, &config)
}

/// `Authorization` header value for an authenticated test caller.
pub fn auth_header() -> String {
    let token = generate_access_token(1, &test_config().auth).expect("test token");
    format!("Bearer {token}")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    authed: bool,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if authed {
        builder = builder.header("authorization", auth_header());
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), false).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), true).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body), true).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body), true).await
}

pub async fn delete_auth(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, true).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, false).await
}

/// Create an animal through the API and return its id.
///
/// `extra` is merged over a minimal valid payload, so tests only spell out
/// the fields they care about.
pub async fn seed_animal(pool: PgPool, extra: serde_json::Value) -> i64 {
    let mut payload = serde_json::json!({
        "nombre": "Canela",
        "raza": "Mestizo",
        "edad": 4
    });
    if let (Some(base), Some(over)) = (payload.as_object_mut(), extra.as_object()) {
        for (key, value) in over {
            base.insert(key.clone(), value.clone());
        }
    }

    let app = build_test_app(pool);
    let response = post_json_auth(app, "/api/animales", payload).await;
    assert_eq!(
        response.status(),
        axum::http::StatusCode::CREATED,
        "seed_animal should create successfully"
    );
    body_json(response).await["id"].as_i64().expect("animal id")
}
