//! Read-only access to the fault-code catalog.
//!
//! Previews never persist anything; use `POST /diagnoses/analyze` to record
//! a diagnosis against a vehicle.

use axum::extract::{Path, State};
use axum::Json;
use garage_core::diagnostics::presentation::DiagnosisPresentation;
use garage_core::diagnostics::synthesizer::validate_fault_code;
use garage_core::diagnostics::FaultCodeTemplate;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One row of the catalog listing.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub code: String,
    pub description: String,
}

/// A synthesized template with its derived totals.
#[derive(Debug, Serialize)]
pub struct FaultCodePreview {
    pub code: String,
    /// `false` when the fallback template was used.
    pub known: bool,
    #[serde(flatten)]
    pub diagnosis: FaultCodeTemplate,
    #[serde(flatten)]
    pub presentation: DiagnosisPresentation,
}

/// GET /api/v1/fault-codes
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<CatalogEntry>>> {
    let entries = state
        .synthesizer
        .catalog()
        .entries()
        .map(|(code, template)| CatalogEntry {
            code: code.to_string(),
            description: template.description.clone(),
        })
        .collect();
    Json(DataResponse { data: entries })
}

/// GET /api/v1/fault-codes/{code}
pub async fn preview(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<FaultCodePreview>> {
    let code = validate_fault_code(&code)?;
    let diagnosis = state.synthesizer.synthesize(&code);
    let presentation = DiagnosisPresentation::from_template(&diagnosis);
    Ok(Json(FaultCodePreview {
        known: state.synthesizer.is_known(&code),
        code,
        diagnosis,
        presentation,
    }))
}
