use crate::types::DbId;

/// Domain error taxonomy shared by every crate in the workspace.
///
/// An unrecognised fault code is deliberately absent: the synthesizer answers
/// it with the fallback template instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced vehicle, project, client or diagnosis does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed or missing caller input.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Missing or invalid caller identity.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The persistence layer cannot be reached. Never retried automatically.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
