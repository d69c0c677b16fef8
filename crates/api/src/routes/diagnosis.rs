//! Route definitions for the `/diagnoses` and `/fault-codes` resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{diagnosis, fault_code};
use crate::state::AppState;

/// Routes mounted at `/diagnoses`.
///
/// ```text
/// POST   /analyze          -> analyze
/// GET    /{id}             -> get_by_id
/// POST   /{id}/resolve     -> mark_resolved
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(diagnosis::analyze))
        .route("/{id}", get(diagnosis::get_by_id))
        .route("/{id}/resolve", post(diagnosis::mark_resolved))
}

/// Routes mounted at `/fault-codes`.
///
/// ```text
/// GET    /                 -> list
/// GET    /{code}           -> preview
/// ```
pub fn fault_code_router() -> Router<AppState> {
    Router::new()
        .route("/", get(fault_code::list))
        .route("/{code}", get(fault_code::preview))
}
