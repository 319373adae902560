//! Adoption-request submission schema.
//!
//! Adoption requests are never persisted: the struct below is a pure input
//! validation schema. Field-length and email constraints are declared with
//! `validator` derives; the animal existence/availability check needs the
//! database and lives in the API handler, which reuses the message constants
//! defined here.

use std::collections::BTreeMap;

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::types::DbId;

/// Confirmation message returned on a successful submission.
pub const CONFIRMATION_MESSAGE: &str = "Solicitud de adopción enviada correctamente";

/// Validation message when the referenced animal does not exist.
pub const ANIMAL_NOT_FOUND: &str = "Animal no encontrado.";

/// Validation message when the referenced animal is not available.
pub const ANIMAL_NOT_AVAILABLE: &str = "Este animal ya no está disponible para adopción.";

/// Field-level validation errors, keyed by field name.
///
/// A `BTreeMap` keeps serialization order deterministic.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// An adoption request as submitted by a site visitor.
///
/// `animal_id` must reference an existing animal whose state is
/// `disponible`; that check is performed at submission time by the handler.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdoptionRequest {
    pub animal_id: DbId,
    #[validate(length(max = 100, message = "Máximo 100 caracteres."))]
    pub nombre: String,
    #[validate(length(max = 200, message = "Máximo 200 caracteres."))]
    pub apellidos: String,
    #[validate(email(message = "Introduce una dirección de correo válida."))]
    pub email: String,
    #[validate(length(max = 15, message = "Máximo 15 caracteres."))]
    pub telefono: String,
    #[validate(length(max = 300, message = "Máximo 300 caracteres."))]
    pub direccion: String,
    #[validate(length(max = 500, message = "Máximo 500 caracteres."))]
    pub experiencia: Option<String>,
    #[validate(length(max = 500, message = "Máximo 500 caracteres."))]
    pub motivacion: String,
    #[serde(default)]
    pub otros_animales: bool,
    #[validate(length(max = 200, message = "Máximo 200 caracteres."))]
    pub espacio_vivienda: String,
}

/// Flatten `validator` output into a field → messages map.
pub fn field_error_map(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Build a single-field error map (used for the animal availability checks).
pub fn single_field_error(field: &str, message: &str) -> FieldErrors {
    let mut map = FieldErrors::new();
    map.insert(field.to_string(), vec![message.to_string()]);
    map
}
