//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garage_core::directory::{ProjectStatus, ServiceType};
use garage_core::error::CoreError;
use garage_core::types::DbId;
use garage_db::models::project::{CreateProject, Project};
use garage_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::handlers::vehicle::ensure_vehicle_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a project exists, returning the full row.
pub(crate) async fn ensure_project_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Project", id }))
}

/// POST /api/v1/projects
///
/// The project's client is copied from the vehicle's owner.
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;
    let status = match input.status.as_deref() {
        Some(s) => ProjectStatus::parse(s)?,
        None => ProjectStatus::default(),
    };
    let service_type = ServiceType::parse(&input.service_type)?;
    let vehicle = ensure_vehicle_exists(&state.pool, input.vehicle_id).await?;

    let project =
        ProjectRepo::create(&state.pool, &input, vehicle.client_id, status, service_type).await?;
    tracing::info!(
        project_id = project.id,
        vehicle_id = project.vehicle_id,
        service_type = %project.service_type,
        "Project opened",
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ensure_project_exists(&state.pool, id).await?;
    Ok(Json(project))
}
