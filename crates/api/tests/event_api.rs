//! HTTP-level integration tests for the events resource.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, delete_auth, get, patch_json_auth, post_json, post_json_auth};
use sqlx::PgPool;

fn event_payload(fecha: &str) -> serde_json::Value {
    serde_json::json!({
        "tipo_evento": "adopcion",
        "fecha_evento": fecha,
        "lugar_evento": "Plaza del pueblo",
        "hora_inicio": "10:00:00",
        "hora_fin": "14:00:00"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_get_event(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/eventos", event_payload("2026-09-12")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["tipo_evento"], "adopcion");
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/eventos/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["lugar_evento"], "Plaza del pueblo");
    assert_eq!(json["hora_inicio"], "10:00:00");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unauthenticated_event_create_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/eventos", event_payload("2026-09-12")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn events_are_listed_by_date_ascending(pool: PgPool) {
    for fecha in ["2026-12-01", "2026-10-01", "2026-11-01"] {
        let app = common::build_test_app(pool.clone());
        post_json_auth(app, "/api/eventos", event_payload(fecha)).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/eventos").await).await;
    let fechas: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["fecha_evento"].as_str().unwrap())
        .collect();
    assert_eq!(fechas, vec!["2026-10-01", "2026-11-01", "2026-12-01"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn proximos_excludes_past_events(pool: PgPool) {
    let yesterday = (Utc::now().date_naive() - Duration::days(1)).to_string();
    let tomorrow = (Utc::now().date_naive() + Duration::days(1)).to_string();

    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/eventos", event_payload(&yesterday)).await;
    let app = common::build_test_app(pool.clone());
    post_json_auth(app, "/api/eventos", event_payload(&tomorrow)).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/eventos/proximos").await).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["fecha_evento"], tomorrow);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_and_delete_event(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json_auth(app, "/api/eventos", event_payload("2026-09-12")).await)
        .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/eventos/{id}"),
        serde_json::json!({"lugar_evento": "Parque nuevo"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["lugar_evento"], "Parque nuevo");
    // Untouched fields stay.
    assert_eq!(json["tipo_evento"], "adopcion");

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/eventos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/eventos/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
