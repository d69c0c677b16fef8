//! Request extractors whose rejections use the standard error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in for [`axum::Json`] on request bodies.
///
/// A missing JSON content type or a body that does not deserialize into `T`
/// is rejected as `400 VALIDATION_ERROR` instead of axum's plain-text
/// 415/422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
