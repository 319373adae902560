//! Handlers for the read-only `/protectora` resource.

use axum::extract::{Path, State};
use axum::Json;
use refugio_core::error::CoreError;
use refugio_core::types::DbId;
use refugio_db::models::shelter::ShelterInfo;
use refugio_db::repositories::ShelterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/protectora
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ShelterInfo>>> {
    let info = ShelterRepo::list(&state.pool).await?;
    Ok(Json(info))
}

/// GET /api/protectora/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShelterInfo>> {
    let info = ShelterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShelterInfo",
            id,
        }))?;
    Ok(Json(info))
}
