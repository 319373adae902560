//! Shared domain types for the shelter backend.
//!
//! Contains the scalar type aliases used across crates, the domain error
//! enum, and the (unpersisted) adoption-request validation schema.

pub mod adoption;
pub mod error;
pub mod types;
