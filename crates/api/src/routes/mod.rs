pub mod client;
pub mod diagnosis;
pub mod health;
pub mod project;
pub mod vehicle;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree. Every route requires a Bearer token.
///
/// ```text
/// /clients                                  list, create
/// /clients/{id}                             get
/// /clients/{id}/vehicles                    vehicles owned by the client
///
/// /vehicles                                 list, create
/// /vehicles/{id}                            get
/// /vehicles/{id}/projects                   projects opened on the vehicle
/// /vehicles/{id}/diagnoses                  diagnosis history, newest first
/// /vehicles/{id}/diagnoses/summary          totals and recurring codes
///
/// /projects                                 list, create
/// /projects/{id}                            get
/// /projects/{id}/diagnoses                  diagnoses linked to the project
///
/// /diagnoses/analyze                        analyze a fault code (POST)
/// /diagnoses/{id}                           get
/// /diagnoses/{id}/resolve                   mark resolved (POST)
///
/// /fault-codes                              catalog listing
/// /fault-codes/{code}                       preview without persisting
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/vehicles", vehicle::router())
        .nest("/projects", project::router())
        .nest("/diagnoses", diagnosis::router())
        .nest("/fault-codes", diagnosis::fault_code_router())
}
