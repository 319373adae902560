//! Repository for the `fotos_animales` table.

use sqlx::PgPool;
use refugio_core::types::DbId;

use crate::models::photo::{AnimalPhoto, CreateAnimalPhoto};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, animal_id, foto, descripcion, orden";

/// Provides gallery operations for animal photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Attach a photo to an animal, returning the created row.
    pub async fn create(
        pool: &PgPool,
        animal_id: DbId,
        input: &CreateAnimalPhoto,
    ) -> Result<AnimalPhoto, sqlx::Error> {
        let query = format!(
            "INSERT INTO fotos_animales (animal_id, foto, descripcion, orden)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnimalPhoto>(&query)
            .bind(animal_id)
            .bind(&input.foto)
            .bind(&input.descripcion)
            .bind(input.orden)
            .fetch_one(pool)
            .await
    }

    /// List an animal's photos in display order.
    pub async fn list_by_animal(
        pool: &PgPool,
        animal_id: DbId,
    ) -> Result<Vec<AnimalPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fotos_animales WHERE animal_id = $1 ORDER BY orden, id"
        );
        sqlx::query_as::<_, AnimalPhoto>(&query)
            .bind(animal_id)
            .fetch_all(pool)
            .await
    }

    /// Delete one photo belonging to the given animal.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, animal_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fotos_animales WHERE id = $1 AND animal_id = $2")
            .bind(id)
            .bind(animal_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count photos for an animal (used to verify cascade deletes in tests).
    pub async fn count_by_animal(pool: &PgPool, animal_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM fotos_animales WHERE animal_id = $1")
            .bind(animal_id)
            .fetch_one(pool)
            .await
    }
}
