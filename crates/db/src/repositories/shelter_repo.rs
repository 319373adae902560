//! Repository for the `protectora` table. Read-only through the API.

use sqlx::PgPool;
use refugio_core::types::DbId;

use crate::models::shelter::ShelterInfo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, numero_telefono, correo_electronico, cuenta_corriente, direccion_teaming";

/// Provides read access to the shelter's contact information.
pub struct ShelterRepo;

impl ShelterRepo {
    /// List all shelter info rows (in practice a single record).
    pub async fn list(pool: &PgPool) -> Result<Vec<ShelterInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM protectora ORDER BY id");
        sqlx::query_as::<_, ShelterInfo>(&query).fetch_all(pool).await
    }

    /// Find a shelter info row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShelterInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM protectora WHERE id = $1");
        sqlx::query_as::<_, ShelterInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
