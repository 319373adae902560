//! Handlers for the `/eventos` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use refugio_core::error::CoreError;
use refugio_core::types::DbId;
use refugio_db::models::event::{CreateEvent, Event, UpdateEvent};
use refugio_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/eventos -- all events ordered by date, soonest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let eventos = EventRepo::list(&state.pool).await?;
    Ok(Json(eventos))
}

/// GET /api/eventos/proximos -- events dated today or later.
pub async fn proximos(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let eventos = EventRepo::list_upcoming(&state.pool).await?;
    Ok(Json(eventos))
}

/// GET /api/eventos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let evento = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(evento))
}

/// POST /api/eventos
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let evento = EventRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(evento)))
}

/// PUT/PATCH /api/eventos/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let evento = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(evento))
}

/// DELETE /api/eventos/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
