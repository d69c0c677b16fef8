//! Repository for the `projects` table.

use garage_core::directory::{ProjectStatus, ServiceType};
use garage_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, vehicle_id, client_id, title, description, status, service_type, \
    estimated_cost, final_cost, notes, created_at, updated_at";

/// Provides create and read operations for service projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project for a vehicle owned by `client_id`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        client_id: DbId,
        status: ProjectStatus,
        service_type: ServiceType,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (vehicle_id, client_id, title, description, status, service_type,
                 estimated_cost, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.vehicle_id)
            .bind(client_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(status.as_str())
            .bind(service_type.as_str())
            .bind(input.estimated_cost)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List the projects opened on a vehicle, most recent first.
    pub async fn list_by_vehicle(
        pool: &PgPool,
        vehicle_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE vehicle_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(vehicle_id)
            .fetch_all(pool)
            .await
    }
}
