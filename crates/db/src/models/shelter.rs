//! Shelter contact information. Read-only through the API; rows are
//! maintained directly by staff.

use refugio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `protectora` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShelterInfo {
    pub id: DbId,
    pub numero_telefono: String,
    pub correo_electronico: String,
    pub cuenta_corriente: String,
    pub direccion_teaming: String,
}
