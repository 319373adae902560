pub mod adoption;
pub mod animal;
pub mod event;
pub mod health;
pub mod shelter;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /animales                          list (filtered), create
/// /animales/disponibles              fixed filter: available
/// /animales/urgentes                 fixed filter: urgent
/// /animales/{id}                     get, update, delete
/// /animales/{id}/fotos               gallery list, add
/// /animales/{id}/fotos/{foto_id}     remove
/// /eventos                           list, create
/// /eventos/proximos                  events dated today or later
/// /eventos/{id}                      get, update, delete
/// /protectora                        read-only list
/// /protectora/{id}                   read-only detail
/// /solicitudes-adopcion/crear        submit adoption request
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/animales", animal::router())
        .nest("/eventos", event::router())
        .nest("/protectora", shelter::router())
        .nest("/solicitudes-adopcion", adoption::router())
}
