//! Repository for the `animales` table.
//!
//! Public listings only ever see visible animals, ordered urgent-first then
//! newest-first. Write paths operate on any row regardless of visibility so
//! staff can toggle an animal back onto the site.

use sqlx::PgPool;
use refugio_core::types::DbId;

use crate::models::animal::{
    Animal, AnimalFilter, AnimalSummary, CreateAnimal, UpdateAnimal,
};

/// Column list shared across full-row queries to avoid repetition.
const COLUMNS: &str = "id, nombre, tipo_animal, raza, edad, tamano, sexo, \
    descripcion, problemas_fisicos, problemas_comportamiento, estado, \
    fecha_ingreso, fecha_adopcion, esterilizado, vacunado, chip, \
    foto_principal, urgente, visible, created_at, updated_at";

/// Column list for the lightweight listing representation.
const SUMMARY_COLUMNS: &str =
    "id, nombre, tipo_animal, raza, edad, tamano, estado, foto_principal, urgente";

/// Listing order: urgent animals first, then most recently created.
/// `id` breaks ties between rows created in the same instant.
const LIST_ORDER: &str = "urgente DESC, created_at DESC, id DESC";

/// Provides CRUD operations and filtered listings for animals.
pub struct AnimalRepo;

impl AnimalRepo {
    /// Insert a new animal, returning the created row.
    ///
    /// `None` DTO fields fall back to the schema defaults (species `perro`,
    /// size `mediano`, state `disponible`, intake date today, flags false,
    /// visible true).
    pub async fn create(pool: &PgPool, input: &CreateAnimal) -> Result<Animal, sqlx::Error> {
        let query = format!(
            "INSERT INTO animales
                (nombre, tipo_animal, raza, edad, tamano, sexo,
                 descripcion, problemas_fisicos, problemas_comportamiento,
                 estado, fecha_ingreso, fecha_adopcion,
                 esterilizado, vacunado, chip, foto_principal, urgente, visible)
             VALUES ($1, COALESCE($2, 'perro'), $3, $4, COALESCE($5, 'mediano'), $6,
                     COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, ''),
                     COALESCE($10, 'disponible'), COALESCE($11, CURRENT_DATE), $12,
                     COALESCE($13, FALSE), COALESCE($14, FALSE), COALESCE($15, FALSE),
                     $16, COALESCE($17, FALSE), COALESCE($18, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(&input.nombre)
            .bind(input.tipo_animal)
            .bind(&input.raza)
            .bind(input.edad)
            .bind(input.tamano)
            .bind(input.sexo)
            .bind(&input.descripcion)
            .bind(&input.problemas_fisicos)
            .bind(&input.problemas_comportamiento)
            .bind(input.estado)
            .bind(input.fecha_ingreso)
            .bind(input.fecha_adopcion)
            .bind(input.esterilizado)
            .bind(input.vacunado)
            .bind(input.chip)
            .bind(&input.foto_principal)
            .bind(input.urgente)
            .bind(input.visible)
            .fetch_one(pool)
            .await
    }

    /// Find an animal by its ID, regardless of visibility.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animales WHERE id = $1");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a visible animal by its ID (public detail page).
    pub async fn find_visible_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM animales WHERE id = $1 AND visible");
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List visible animals matching all supplied filter criteria.
    ///
    /// One fixed statement covers every filter combination: each criterion
    /// collapses to TRUE when its bound parameter is NULL.
    pub async fn list(
        pool: &PgPool,
        filter: &AnimalFilter,
    ) -> Result<Vec<AnimalSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM animales
             WHERE visible
               AND ($1::estado_animal IS NULL OR estado = $1)
               AND ($2::tipo_animal IS NULL OR tipo_animal = $2)
               AND ($3::tamano_animal IS NULL OR tamano = $3)
               AND ($4::INT IS NULL OR edad >= $4)
               AND ($5::INT IS NULL OR edad <= $5)
               AND (NOT $6 OR urgente)
             ORDER BY {LIST_ORDER}"
        );
        sqlx::query_as::<_, AnimalSummary>(&query)
            .bind(filter.estado)
            .bind(filter.tipo_animal)
            .bind(filter.tamano)
            .bind(filter.edad_min)
            .bind(filter.edad_max)
            .bind(filter.urgent_only())
            .fetch_all(pool)
            .await
    }

    /// Fixed-filter view: visible animals available for adoption.
    pub async fn list_disponibles(pool: &PgPool) -> Result<Vec<AnimalSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM animales
             WHERE estado = 'disponible' AND visible
             ORDER BY {LIST_ORDER}"
        );
        sqlx::query_as::<_, AnimalSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fixed-filter view: visible, available animals flagged urgent.
    pub async fn list_urgentes(pool: &PgPool) -> Result<Vec<AnimalSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM animales
             WHERE urgente AND estado = 'disponible' AND visible
             ORDER BY {LIST_ORDER}"
        );
        sqlx::query_as::<_, AnimalSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an animal. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnimal,
    ) -> Result<Option<Animal>, sqlx::Error> {
        let query = format!(
            "UPDATE animales SET
                nombre = COALESCE($2, nombre),
                tipo_animal = COALESCE($3, tipo_animal),
                raza = COALESCE($4, raza),
                edad = COALESCE($5, edad),
                tamano = COALESCE($6, tamano),
                sexo = COALESCE($7, sexo),
                descripcion = COALESCE($8, descripcion),
                problemas_fisicos = COALESCE($9, problemas_fisicos),
                problemas_comportamiento = COALESCE($10, problemas_comportamiento),
                estado = COALESCE($11, estado),
                fecha_ingreso = COALESCE($12, fecha_ingreso),
                fecha_adopcion = COALESCE($13, fecha_adopcion),
                esterilizado = COALESCE($14, esterilizado),
                vacunado = COALESCE($15, vacunado),
                chip = COALESCE($16, chip),
                foto_principal = COALESCE($17, foto_principal),
                urgente = COALESCE($18, urgente),
                visible = COALESCE($19, visible),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Animal>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(input.tipo_animal)
            .bind(&input.raza)
            .bind(input.edad)
            .bind(input.tamano)
            .bind(input.sexo)
            .bind(&input.descripcion)
            .bind(&input.problemas_fisicos)
            .bind(&input.problemas_comportamiento)
            .bind(input.estado)
            .bind(input.fecha_ingreso)
            .bind(input.fecha_adopcion)
            .bind(input.esterilizado)
            .bind(input.vacunado)
            .bind(input.chip)
            .bind(&input.foto_principal)
            .bind(input.urgente)
            .bind(input.visible)
            .fetch_optional(pool)
            .await
    }

    /// Delete an animal by ID. Photos cascade at the schema level.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM animales WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
