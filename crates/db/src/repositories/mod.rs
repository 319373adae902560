//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod animal_repo;
pub mod event_repo;
pub mod photo_repo;
pub mod shelter_repo;

pub use animal_repo::AnimalRepo;
pub use event_repo::EventRepo;
pub use photo_repo::PhotoRepo;
pub use shelter_repo::ShelterRepo;
