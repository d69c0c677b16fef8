//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garage_core::error::CoreError;
use garage_core::types::DbId;
use garage_db::models::client::{Client, CreateClient};
use garage_db::models::vehicle::Vehicle;
use garage_db::repositories::{ClientRepo, VehicleRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a client exists, returning the full row.
pub(crate) async fn ensure_client_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Client> {
    ClientRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Client", id }))
}

/// POST /api/v1/clients
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    input.validate()?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(client_id = client.id, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Client>>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: clients }))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ensure_client_exists(&state.pool, id).await?;
    Ok(Json(client))
}

/// GET /api/v1/clients/{id}/vehicles
pub async fn list_vehicles(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Vehicle>>>> {
    ensure_client_exists(&state.pool, id).await?;
    let vehicles = VehicleRepo::list_by_client(&state.pool, id).await?;
    Ok(Json(DataResponse { data: vehicles }))
}
