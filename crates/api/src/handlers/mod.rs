//! Request handlers, one module per resource.

pub mod adoption;
pub mod animal;
pub mod event;
pub mod shelter;
