//! Handler for adoption-request submissions.
//!
//! Requests are validated but never persisted: on success the shelter is
//! notified (best-effort) and the caller gets a confirmation payload.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use refugio_core::adoption::{
    field_error_map, single_field_error, AdoptionRequest, ANIMAL_NOT_AVAILABLE,
    ANIMAL_NOT_FOUND, CONFIRMATION_MESSAGE,
};
use refugio_db::models::animal::AnimalStatus;
use refugio_db::repositories::AnimalRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Confirmation payload returned on a successful submission.
#[derive(Debug, Serialize)]
pub struct AdoptionConfirmation {
    pub mensaje: String,
    pub animal: String,
}

/// POST /api/solicitudes-adopcion/crear
///
/// Validates the submitted form and the referenced animal's availability.
/// Returns 201 with `{mensaje, animal}` on success, or 400 with a
/// field → messages map on validation failure.
pub async fn crear(
    State(state): State<AppState>,
    Json(input): Json<AdoptionRequest>,
) -> AppResult<(StatusCode, Json<AdoptionConfirmation>)> {
    if let Err(errors) = input.validate() {
        return Err(AppError::ValidationFields(field_error_map(&errors)));
    }

    let animal = match AnimalRepo::find_by_id(&state.pool, input.animal_id).await? {
        Some(animal) => animal,
        None => {
            return Err(AppError::ValidationFields(single_field_error(
                "animal_id",
                ANIMAL_NOT_FOUND,
            )))
        }
    };
    if animal.estado != AnimalStatus::Disponible {
        return Err(AppError::ValidationFields(single_field_error(
            "animal_id",
            ANIMAL_NOT_AVAILABLE,
        )));
    }

    // Best-effort: a failed notification must never fail the submission.
    if let Some(notifier) = &state.notifier {
        if let Err(err) = notifier.adoption_request(&input, &animal).await {
            tracing::warn!(
                error = %err,
                animal_id = animal.id,
                "Adoption request notification failed"
            );
        }
    } else {
        tracing::info!(animal_id = animal.id, "Adoption request received (no notifier configured)");
    }

    Ok((
        StatusCode::CREATED,
        Json(AdoptionConfirmation {
            mensaje: CONFIRMATION_MESSAGE.to_string(),
            animal: animal.nombre,
        }),
    ))
}
