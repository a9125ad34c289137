use std::fmt::Display;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gatherly_core::error::CoreError;
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the collaborator-failure
/// variants. Implements [`IntoResponse`] to produce the uniform
/// `{ "error": ..., "details"?: ... }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gatherly_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage or transport call failed. `cause` is always logged and is
    /// returned as `details` only when `expose_details` is set.
    #[error("{message}: {cause}")]
    Backend {
        message: &'static str,
        cause: String,
        expose_details: bool,
    },

    /// The existence probe before a destructive operation failed.
    #[error("{entity} not found: {cause}")]
    ProbeFailed { entity: &'static str, cause: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 500 with `message` and the underlying error text as `details`.
    pub fn backend(message: &'static str, cause: impl Display) -> Self {
        AppError::Backend {
            message,
            cause: cause.to_string(),
            expose_details: true,
        }
    }

    /// 500 with a fixed `message` only; the cause never reaches the client.
    pub fn opaque(message: &'static str, cause: impl Display) -> Self {
        AppError::Backend {
            message,
            cause: cause.to_string(),
            expose_details: false,
        }
    }

    /// 404 for a failed existence probe, carrying the probe's error text.
    pub fn probe_failed(entity: &'static str, cause: impl Display) -> Self {
        AppError::ProbeFailed {
            entity,
            cause: cause.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
                err @ CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string(), None),
                CoreError::Unauthorized(msg) => {
                    tracing::warn!(error = %msg, "Collaborator rejected credentials");
                    (StatusCode::UNAUTHORIZED, msg, None)
                }
                CoreError::Config(msg) => {
                    tracing::error!(error = %msg, "Missing configuration");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },

            // --- Collaborator failures ---
            AppError::Backend {
                message,
                cause,
                expose_details,
            } => {
                tracing::error!(error = %cause, "{message}");
                let details = expose_details.then_some(cause);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string(), details)
            }
            AppError::ProbeFailed { entity, cause } => {
                tracing::warn!(error = %cause, entity, "Existence probe failed");
                (
                    StatusCode::NOT_FOUND,
                    format!("{entity} not found"),
                    Some(cause),
                )
            }
        };

        (status, axum::Json(ErrorBody { error, details })).into_response()
    }
}

/// Malformed JSON bodies are validation failures like any other.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}
