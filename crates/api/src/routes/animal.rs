//! Route definitions for the animals resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::animal;
use crate::state::AppState;

/// Routes mounted at `/animales`.
///
/// ```text
/// GET    /                       -> list (query-filtered)
/// POST   /                       -> create (auth)
/// GET    /disponibles            -> fixed filter: available
/// GET    /urgentes               -> fixed filter: urgent
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update (auth)
/// PATCH  /{id}                   -> update (auth)
/// DELETE /{id}                   -> delete (auth)
/// GET    /{id}/fotos             -> list_photos
/// POST   /{id}/fotos             -> create_photo (auth)
/// DELETE /{id}/fotos/{foto_id}   -> delete_photo (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(animal::list).post(animal::create))
        .route("/disponibles", get(animal::disponibles))
        .route("/urgentes", get(animal::urgentes))
        .route(
            "/{id}",
            get(animal::get_by_id)
                .put(animal::update)
                .patch(animal::update)
                .delete(animal::delete),
        )
        .route(
            "/{id}/fotos",
            get(animal::list_photos).post(animal::create_photo),
        )
        .route("/{id}/fotos/{foto_id}", delete(animal::delete_photo))
}
