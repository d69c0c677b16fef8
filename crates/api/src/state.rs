use std::sync::Arc;

use garage_core::diagnostics::DiagnosisSynthesizer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: garage_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Fault-code synthesizer over the catalog loaded at startup.
    pub synthesizer: Arc<DiagnosisSynthesizer>,
}
