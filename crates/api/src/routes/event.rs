//! Route definitions for the events resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/eventos`.
///
/// ```text
/// GET    /            -> list (date-ordered)
/// POST   /            -> create (auth)
/// GET    /proximos    -> upcoming events
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update (auth)
/// PATCH  /{id}        -> update (auth)
/// DELETE /{id}        -> delete (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list).post(event::create))
        .route("/proximos", get(event::proximos))
        .route(
            "/{id}",
            get(event::get_by_id)
                .put(event::update)
                .patch(event::update)
                .delete(event::delete),
        )
}
