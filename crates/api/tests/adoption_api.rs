//! HTTP-level integration tests for adoption-request submission.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, seed_animal};
use sqlx::PgPool;

fn request_payload(animal_id: i64) -> serde_json::Value {
    serde_json::json!({
        "animal_id": animal_id,
        "nombre": "Ane",
        "apellidos": "Etxeberria",
        "email": "ane@example.com",
        "telefono": "600123456",
        "direccion": "Calle Mayor 1, Donostia",
        "motivacion": "Siempre he querido adoptar.",
        "espacio_vivienda": "Piso con terraza"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_request_returns_201_with_confirmation(pool: PgPool) {
    let id = seed_animal(pool.clone(), serde_json::json!({"nombre": "Luna"})).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/solicitudes-adopcion/crear", request_payload(id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["mensaje"], "Solicitud de adopción enviada correctamente");
    assert_eq!(json["animal"], "Luna");

    // Submissions are never persisted: the datastore holds no trace.
    let tables: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM information_schema.tables
         WHERE table_schema = 'public' AND table_name LIKE '%solicitud%'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(tables, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_animal_returns_400_naming_the_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/solicitudes-adopcion/crear",
        request_payload(999999),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["animal_id"][0], "Animal no encontrado.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_available_animal_returns_400(pool: PgPool) {
    let id = seed_animal(pool.clone(), serde_json::json!({"estado": "adoptado"})).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/solicitudes-adopcion/crear", request_payload(id)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["animal_id"][0],
        "Este animal ya no está disponible para adopción."
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_fields_are_reported_per_field(pool: PgPool) {
    let id = seed_animal(pool.clone(), serde_json::json!({})).await;

    let mut payload = request_payload(id);
    payload["email"] = serde_json::json!("not-an-email");
    payload["telefono"] = serde_json::json!("0123456789012345678");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/solicitudes-adopcion/crear", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json.get("email").is_some());
    assert!(json.get("telefono").is_some());
    // Valid fields are not reported.
    assert!(json.get("nombre").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reserved_animal_is_not_adoptable(pool: PgPool) {
    let id = seed_animal(pool.clone(), serde_json::json!({"estado": "reservado"})).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/solicitudes-adopcion/crear", request_payload(id)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
