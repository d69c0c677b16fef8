//! Service project entity model and DTOs.

use garage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
///
/// `status` and `service_type` hold the text forms of
/// [`garage_core::directory::ProjectStatus`] and
/// [`garage_core::directory::ServiceType`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub vehicle_id: DbId,
    pub client_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub service_type: String,
    pub estimated_cost: Option<i32>,
    pub final_cost: Option<i32>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for opening a project on a vehicle.
///
/// The owning client is taken from the vehicle. `status` defaults to
/// `received` if omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    pub vehicle_id: DbId,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub service_type: String,
    #[validate(range(min = 0))]
    pub estimated_cost: Option<i32>,
    pub notes: Option<String>,
}
