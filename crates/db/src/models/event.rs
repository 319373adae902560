//! Shelter events (adoption days, talks, fundraisers).

use chrono::{NaiveDate, NaiveTime};
use refugio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of event (`tipo_evento`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tipo_evento", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Adopcion,
    Charla,
    Recaudacion,
    Otro,
}

/// A row from the `eventos` table. Events have no relation to animals.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub tipo_evento: EventKind,
    pub fecha_evento: NaiveDate,
    pub lugar_evento: String,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
}

/// DTO for creating an event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub tipo_evento: EventKind,
    pub fecha_evento: NaiveDate,
    pub lugar_evento: String,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
}

/// DTO for updating an event. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub tipo_evento: Option<EventKind>,
    pub fecha_evento: Option<NaiveDate>,
    pub lugar_evento: Option<String>,
    pub hora_inicio: Option<NaiveTime>,
    pub hora_fin: Option<NaiveTime>,
}
