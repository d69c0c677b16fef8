//! Handlers for fault-code analysis and the diagnosis history.
//!
//! Analysis validates the references, synthesizes the bundle from the
//! injected catalog and stores a snapshot. Reads decode the snapshot and
//! recompute the cost totals every time.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garage_core::diagnostics::history::{summarize_history, FaultHistorySummary};
use garage_core::diagnostics::synthesizer::validate_fault_code;
use garage_core::error::CoreError;
use garage_core::types::DbId;
use garage_db::models::diagnosis::{Diagnosis, DiagnosisDetail, NewDiagnosis};
use garage_db::repositories::DiagnosisRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::handlers::project::ensure_project_exists;
use crate::handlers::vehicle::ensure_vehicle_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /diagnoses/analyze`.
///
/// `code` and `vehicle_id` are optional at the serde level so that a missing
/// value is reported as a validation error rather than an extractor
/// rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeFaultCode {
    pub code: Option<String>,
    pub vehicle_id: Option<DbId>,
    pub project_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a diagnosis exists, returning the stored row.
async fn ensure_diagnosis_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Diagnosis> {
    DiagnosisRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Diagnosis",
            id,
        })
    })
}

/// Check that `project_id` exists and decide what to do when it belongs to
/// another vehicle.
async fn check_project_link(
    state: &AppState,
    vehicle_id: DbId,
    project_id: DbId,
) -> AppResult<()> {
    let project = ensure_project_exists(&state.pool, project_id).await?;
    if project.vehicle_id == vehicle_id {
        return Ok(());
    }
    if state.config.enforce_project_vehicle_match {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Project {project_id} belongs to vehicle {}, not vehicle {vehicle_id}",
            project.vehicle_id
        ))));
    }
    tracing::warn!(
        project_id,
        vehicle_id,
        project_vehicle_id = project.vehicle_id,
        "Diagnosis links a project owned by a different vehicle",
    );
    Ok(())
}

fn into_details(rows: Vec<Diagnosis>) -> AppResult<Vec<DiagnosisDetail>> {
    rows.into_iter()
        .map(|row| DiagnosisDetail::try_from(row).map_err(AppError::from))
        .collect()
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/diagnoses/analyze
///
/// Every call creates a new record, including repeats of the same code on
/// the same vehicle.
pub async fn analyze(
    auth: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<AnalyzeFaultCode>,
) -> AppResult<(StatusCode, Json<DiagnosisDetail>)> {
    let code = validate_fault_code(input.code.as_deref().unwrap_or_default())?;
    let vehicle_id = input
        .vehicle_id
        .ok_or_else(|| CoreError::Validation("vehicle_id is required".into()))?;

    ensure_vehicle_exists(&state.pool, vehicle_id).await?;
    if let Some(project_id) = input.project_id {
        check_project_link(&state, vehicle_id, project_id).await?;
    }

    let known = state.synthesizer.is_known(&code);
    let template = state.synthesizer.synthesize(&code);
    let new = NewDiagnosis::from_template(vehicle_id, input.project_id, code, &template)?;
    let row = DiagnosisRepo::create(&state.pool, &new).await?;

    tracing::info!(
        diagnosis_id = row.id,
        vehicle_id,
        project_id = ?row.project_id,
        code = %row.code,
        known,
        user_id = auth.user_id,
        "Fault code analyzed",
    );

    Ok((StatusCode::CREATED, Json(DiagnosisDetail::try_from(row)?)))
}

/// GET /api/v1/diagnoses/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DiagnosisDetail>> {
    let row = ensure_diagnosis_exists(&state.pool, id).await?;
    Ok(Json(DiagnosisDetail::try_from(row)?))
}

/// POST /api/v1/diagnoses/{id}/resolve
///
/// Idempotent: resolving an already-resolved diagnosis also returns 204.
pub async fn mark_resolved(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let found = DiagnosisRepo::mark_resolved(&state.pool, id).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Diagnosis",
            id,
        }));
    }
    tracing::info!(diagnosis_id = id, user_id = auth.user_id, "Diagnosis resolved");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/vehicles/{id}/diagnoses
pub async fn list_by_vehicle(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(vehicle_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<DiagnosisDetail>>>> {
    ensure_vehicle_exists(&state.pool, vehicle_id).await?;
    let rows = DiagnosisRepo::list_by_vehicle(&state.pool, vehicle_id).await?;
    Ok(Json(DataResponse {
        data: into_details(rows)?,
    }))
}

/// GET /api/v1/vehicles/{id}/diagnoses/summary
pub async fn vehicle_summary(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(vehicle_id): Path<DbId>,
) -> AppResult<Json<DataResponse<FaultHistorySummary>>> {
    ensure_vehicle_exists(&state.pool, vehicle_id).await?;
    let history = DiagnosisRepo::code_history(&state.pool, vehicle_id).await?;
    let summary = summarize_history(
        history
            .iter()
            .map(|(code, resolved)| (code.as_str(), *resolved)),
    );
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/projects/{id}/diagnoses
pub async fn list_by_project(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<DiagnosisDetail>>>> {
    ensure_project_exists(&state.pool, project_id).await?;
    let rows = DiagnosisRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse {
        data: into_details(rows)?,
    }))
}
