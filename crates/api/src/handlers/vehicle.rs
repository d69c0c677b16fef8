//! Handlers for the `/vehicles` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garage_core::directory::normalize_vin;
use garage_core::error::CoreError;
use garage_core::types::DbId;
use garage_db::models::project::Project;
use garage_db::models::vehicle::{CreateVehicle, Vehicle};
use garage_db::repositories::{ProjectRepo, VehicleRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::handlers::client::ensure_client_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a vehicle exists, returning the full row.
pub(crate) async fn ensure_vehicle_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Vehicle> {
    VehicleRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Vehicle", id }))
}

/// POST /api/v1/vehicles
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    input.validate()?;
    let vin = normalize_vin(&input.vin)?;
    ensure_client_exists(&state.pool, input.client_id).await?;

    let vehicle = VehicleRepo::create(&state.pool, &input, &vin).await?;
    tracing::info!(vehicle_id = vehicle.id, client_id = vehicle.client_id, "Vehicle registered");
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /api/v1/vehicles
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Vehicle>>>> {
    let vehicles = VehicleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: vehicles }))
}

/// GET /api/v1/vehicles/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = ensure_vehicle_exists(&state.pool, id).await?;
    Ok(Json(vehicle))
}

/// GET /api/v1/vehicles/{id}/projects
pub async fn list_projects(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    ensure_vehicle_exists(&state.pool, id).await?;
    let projects = ProjectRepo::list_by_vehicle(&state.pool, id).await?;
    Ok(Json(DataResponse { data: projects }))
}
