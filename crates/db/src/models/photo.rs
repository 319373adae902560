//! Photo gallery entries owned by an animal.

use refugio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `fotos_animales` table.
///
/// Rows are cascade-deleted with their parent animal.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnimalPhoto {
    pub id: DbId,
    pub animal_id: DbId,
    pub foto: String,
    pub descripcion: String,
    pub orden: i32,
}

/// DTO for attaching a photo to an animal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnimalPhoto {
    /// Stored file reference (object-store key or path).
    pub foto: String,
    pub descripcion: Option<String>,
    /// Display position within the gallery; lower values come first.
    pub orden: Option<i32>,
}
