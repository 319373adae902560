//! Route definitions for the read-only shelter info resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shelter;
use crate::state::AppState;

/// Routes mounted at `/protectora` (read-only).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shelter::list))
        .route("/{id}", get(shelter::get_by_id))
}
