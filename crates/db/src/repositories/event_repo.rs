//! Repository for the `eventos` table.

use sqlx::PgPool;
use refugio_core::types::DbId;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tipo_evento, fecha_evento, lugar_evento, hora_inicio, hora_fin";

/// Provides CRUD operations for shelter events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO eventos (tipo_evento, fecha_evento, lugar_evento, hora_inicio, hora_fin)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.tipo_evento)
            .bind(input.fecha_evento)
            .bind(&input.lugar_evento)
            .bind(input.hora_inicio)
            .bind(input.hora_fin)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM eventos WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all events ordered by date, soonest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM eventos ORDER BY fecha_evento, id");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// List events whose date is today or later, soonest first.
    pub async fn list_upcoming(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM eventos
             WHERE fecha_evento >= CURRENT_DATE
             ORDER BY fecha_evento, id"
        );
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE eventos SET
                tipo_evento = COALESCE($2, tipo_evento),
                fecha_evento = COALESCE($3, fecha_evento),
                lugar_evento = COALESCE($4, lugar_evento),
                hora_inicio = COALESCE($5, hora_inicio),
                hora_fin = COALESCE($6, hora_fin)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.tipo_evento)
            .bind(input.fecha_evento)
            .bind(&input.lugar_evento)
            .bind(input.hora_inicio)
            .bind(input.hora_fin)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM eventos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
