//! Handlers for the `/animales` resource.
//!
//! Reads are public and visibility-gated; writes require an authenticated
//! caller. List endpoints use the lightweight summary representation,
//! detail endpoints the full row plus the ordered photo gallery.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use refugio_core::error::CoreError;
use refugio_core::types::DbId;
use refugio_db::models::animal::{
    AnimalFilter, AnimalSummary, AnimalWithPhotos, CreateAnimal, UpdateAnimal,
};
use refugio_db::models::photo::{AnimalPhoto, CreateAnimalPhoto};
use refugio_db::repositories::{AnimalRepo, PhotoRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/animales
///
/// Filtered listing of visible animals, urgent-first then newest-first.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AnimalFilter>,
) -> AppResult<Json<Vec<AnimalSummary>>> {
    let animales = AnimalRepo::list(&state.pool, &filter).await?;
    Ok(Json(animales))
}

/// GET /api/animales/disponibles
pub async fn disponibles(State(state): State<AppState>) -> AppResult<Json<Vec<AnimalSummary>>> {
    let animales = AnimalRepo::list_disponibles(&state.pool).await?;
    Ok(Json(animales))
}

/// GET /api/animales/urgentes
pub async fn urgentes(State(state): State<AppState>) -> AppResult<Json<Vec<AnimalSummary>>> {
    let animales = AnimalRepo::list_urgentes(&state.pool).await?;
    Ok(Json(animales))
}

/// GET /api/animales/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AnimalWithPhotos>> {
    let animal = AnimalRepo::find_visible_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Animal",
            id,
        }))?;
    let fotos = PhotoRepo::list_by_animal(&state.pool, id).await?;
    Ok(Json(AnimalWithPhotos { animal, fotos }))
}

/// POST /api/animales
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateAnimal>,
) -> AppResult<(StatusCode, Json<AnimalWithPhotos>)> {
    if input.edad < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "edad must be non-negative".into(),
        )));
    }
    let animal = AnimalRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(AnimalWithPhotos {
            animal,
            fotos: Vec::new(),
        }),
    ))
}

/// PUT/PATCH /api/animales/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnimal>,
) -> AppResult<Json<AnimalWithPhotos>> {
    if input.edad.is_some_and(|edad| edad < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "edad must be non-negative".into(),
        )));
    }
    let animal = AnimalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Animal",
            id,
        }))?;
    let fotos = PhotoRepo::list_by_animal(&state.pool, id).await?;
    Ok(Json(AnimalWithPhotos { animal, fotos }))
}

/// DELETE /api/animales/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AnimalRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Animal",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Photo gallery
// ---------------------------------------------------------------------------

/// GET /api/animales/{id}/fotos
pub async fn list_photos(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<AnimalPhoto>>> {
    require_animal(&state, id).await?;
    let fotos = PhotoRepo::list_by_animal(&state.pool, id).await?;
    Ok(Json(fotos))
}

/// POST /api/animales/{id}/fotos
pub async fn create_photo(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateAnimalPhoto>,
) -> AppResult<(StatusCode, Json<AnimalPhoto>)> {
    if input.orden.is_some_and(|orden| orden < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "orden must be non-negative".into(),
        )));
    }
    require_animal(&state, id).await?;
    let foto = PhotoRepo::create(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(foto)))
}

/// DELETE /api/animales/{id}/fotos/{foto_id}
pub async fn delete_photo(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((id, foto_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = PhotoRepo::delete(&state.pool, id, foto_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AnimalPhoto",
            id: foto_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn require_animal(state: &AppState, id: DbId) -> AppResult<()> {
    AnimalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Animal",
            id,
        }))?;
    Ok(())
}
