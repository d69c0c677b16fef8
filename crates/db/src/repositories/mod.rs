//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod client_repo;
pub mod diagnosis_repo;
pub mod project_repo;
pub mod vehicle_repo;

pub use client_repo::ClientRepo;
pub use diagnosis_repo::DiagnosisRepo;
pub use project_repo::ProjectRepo;
pub use vehicle_repo::VehicleRepo;
