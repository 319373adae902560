//! Animal entity, its closed vocabularies, DTOs and list-filter criteria.

use std::fmt;

use chrono::NaiveDate;
use refugio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::photo::AnimalPhoto;

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Species of a sheltered animal (`tipo_animal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tipo_animal", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Perro,
    Gato,
    Otro,
}

impl Species {
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Perro => "perro",
            Species::Gato => "gato",
            Species::Otro => "otro",
        }
    }
}

/// Adoption lifecycle state (`estado`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "estado_animal", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AnimalStatus {
    Disponible,
    Reservado,
    Adoptado,
    EnTratamiento,
}

impl AnimalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimalStatus::Disponible => "disponible",
            AnimalStatus::Reservado => "reservado",
            AnimalStatus::Adoptado => "adoptado",
            AnimalStatus::EnTratamiento => "en_tratamiento",
        }
    }
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Animal size (`tamaño`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tamano_animal", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Size {
    #[sqlx(rename = "pequeño")]
    #[serde(rename = "pequeño")]
    Pequeno,
    Mediano,
    Grande,
}

/// Animal sex (`sexo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sexo_animal", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Macho,
    Hembra,
}

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `animales` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Animal {
    pub id: DbId,
    pub nombre: String,
    pub tipo_animal: Species,
    pub raza: String,
    pub edad: i32,
    #[serde(rename = "tamaño")]
    pub tamano: Size,
    pub sexo: Option<Sex>,
    pub descripcion: String,
    pub problemas_fisicos: String,
    pub problemas_comportamiento: String,
    pub estado: AnimalStatus,
    pub fecha_ingreso: Option<NaiveDate>,
    pub fecha_adopcion: Option<NaiveDate>,
    pub esterilizado: bool,
    pub vacunado: bool,
    pub chip: bool,
    pub foto_principal: Option<String>,
    pub urgente: bool,
    pub visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.nombre, self.raza, self.estado)
    }
}

/// Lightweight representation used by list endpoints to keep payloads small.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnimalSummary {
    pub id: DbId,
    pub nombre: String,
    pub tipo_animal: Species,
    pub raza: String,
    pub edad: i32,
    #[serde(rename = "tamaño")]
    pub tamano: Size,
    pub estado: AnimalStatus,
    pub foto_principal: Option<String>,
    pub urgente: bool,
}

/// Full detail representation: the animal plus its ordered photo gallery.
#[derive(Debug, Clone, Serialize)]
pub struct AnimalWithPhotos {
    #[serde(flatten)]
    pub animal: Animal,
    pub fotos: Vec<AnimalPhoto>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating an animal. Omitted fields take the schema defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnimal {
    pub nombre: String,
    pub tipo_animal: Option<Species>,
    pub raza: String,
    pub edad: i32,
    #[serde(rename = "tamaño")]
    pub tamano: Option<Size>,
    pub sexo: Option<Sex>,
    pub descripcion: Option<String>,
    pub problemas_fisicos: Option<String>,
    pub problemas_comportamiento: Option<String>,
    pub estado: Option<AnimalStatus>,
    pub fecha_ingreso: Option<NaiveDate>,
    pub fecha_adopcion: Option<NaiveDate>,
    pub esterilizado: Option<bool>,
    pub vacunado: Option<bool>,
    pub chip: Option<bool>,
    pub foto_principal: Option<String>,
    pub urgente: Option<bool>,
    pub visible: Option<bool>,
}

/// DTO for updating an animal. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAnimal {
    pub nombre: Option<String>,
    pub tipo_animal: Option<Species>,
    pub raza: Option<String>,
    pub edad: Option<i32>,
    #[serde(rename = "tamaño")]
    pub tamano: Option<Size>,
    pub sexo: Option<Sex>,
    pub descripcion: Option<String>,
    pub problemas_fisicos: Option<String>,
    pub problemas_comportamiento: Option<String>,
    pub estado: Option<AnimalStatus>,
    pub fecha_ingreso: Option<NaiveDate>,
    pub fecha_adopcion: Option<NaiveDate>,
    pub esterilizado: Option<bool>,
    pub vacunado: Option<bool>,
    pub chip: Option<bool>,
    pub foto_principal: Option<String>,
    pub urgente: Option<bool>,
    pub visible: Option<bool>,
}

// ---------------------------------------------------------------------------
// List filtering
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/animales`.
///
/// Absent parameters impose no constraint; supplied ones combine with
/// logical AND. `urgente=true` restricts to urgent animals, `urgente=false`
/// is treated like an absent parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimalFilter {
    pub estado: Option<AnimalStatus>,
    pub tipo_animal: Option<Species>,
    #[serde(rename = "tamaño")]
    pub tamano: Option<Size>,
    pub edad_min: Option<i32>,
    pub edad_max: Option<i32>,
    pub urgente: Option<bool>,
}

impl AnimalFilter {
    /// Whether the filter restricts to urgent animals.
    pub fn urgent_only(&self) -> bool {
        self.urgente.unwrap_or(false)
    }
}
