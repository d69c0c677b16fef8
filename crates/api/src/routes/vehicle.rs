//! Route definitions for the `/vehicles` resource.
//!
//! Also exposes the vehicle's diagnosis history tab.

use axum::routing::get;
use axum::Router;

use crate::handlers::{diagnosis, vehicle};
use crate::state::AppState;

/// Routes mounted at `/vehicles`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// GET    /{id}/projects             -> list_projects
/// GET    /{id}/diagnoses            -> diagnosis::list_by_vehicle
/// GET    /{id}/diagnoses/summary    -> diagnosis::vehicle_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(vehicle::list).post(vehicle::create))
        .route("/{id}", get(vehicle::get_by_id))
        .route("/{id}/projects", get(vehicle::list_projects))
        .route("/{id}/diagnoses", get(diagnosis::list_by_vehicle))
        .route("/{id}/diagnoses/summary", get(diagnosis::vehicle_summary))
}
