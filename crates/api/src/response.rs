//! Shared response envelope types for API handlers.
//!
//! Collection endpoints use a `{ "data": ... }` envelope. Single entities are
//! returned bare.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
