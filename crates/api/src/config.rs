use std::path::PathBuf;

use garage_core::diagnostics::FaultCodeCatalog;
use garage_core::error::CoreError;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on the post-shutdown drain, in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JSON fault-code catalog to load instead of the built-in one.
    pub dtc_catalog_path: Option<PathBuf>,
    /// Reject diagnoses whose project belongs to a different vehicle.
    /// When off, the mismatch is only logged.
    pub enforce_project_vehicle_match: bool,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                             | Default                 |
    /// |-------------------------------------|-------------------------|
    /// | `HOST`                              | `0.0.0.0`               |
    /// | `PORT`                              | `3000`                  |
    /// | `CORS_ORIGINS`                      | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`              | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`             | `30`                    |
    /// | `DTC_CATALOG_PATH`                  | unset (built-in)        |
    /// | `DIAGNOSIS_ENFORCE_PROJECT_VEHICLE` | `false`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let dtc_catalog_path = std::env::var("DTC_CATALOG_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let enforce_project_vehicle_match = std::env::var("DIAGNOSIS_ENFORCE_PROJECT_VEHICLE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            dtc_catalog_path,
            enforce_project_vehicle_match,
            jwt,
        }
    }

    /// Build the fault-code catalog this server will inject into handlers.
    pub fn load_catalog(&self) -> Result<FaultCodeCatalog, CoreError> {
        match &self.dtc_catalog_path {
            Some(path) => FaultCodeCatalog::from_json_file(path),
            None => Ok(FaultCodeCatalog::builtin()),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
