//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Wire field names stay Spanish to preserve the public API contract the
//! site frontend already consumes; Rust type names are English.

pub mod animal;
pub mod event;
pub mod photo;
pub mod shelter;
