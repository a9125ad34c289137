//! Request extractors whose rejections use the [`AppError`] body shape.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with malformed bodies rejected as `400 {"error": ...}`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
