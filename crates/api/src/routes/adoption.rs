//! Route definition for adoption-request submission.

use axum::routing::post;
use axum::Router;

use crate::handlers::adoption;
use crate::state::AppState;

/// Routes mounted at `/solicitudes-adopcion`.
pub fn router() -> Router<AppState> {
    Router::new().route("/crear", post(adoption::crear))
}
