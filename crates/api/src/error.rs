use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use validator::ValidationErrors;

use paddock_core::error::CoreError;
use paddock_db::StoreError;

/// Wire shape for field-level validation failures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormError {
    pub error_message: String,
    pub field_name: String,
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures. Implements [`IntoResponse`] to produce the API's error bodies:
/// field-level failures serialize as [`FormError`] JSON, everything else
/// returns the reason string as the body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `paddock_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `paddock_db`.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Convert the first field failure reported by `validator` into the
    /// domain's field-level error, which renders as [`FormError`].
    pub fn from_validation(errors: ValidationErrors) -> Self {
        let (field, message) = errors
            .field_errors()
            .iter()
            .next()
            .map(|(field, field_errors)| {
                let message = field_errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for field \"{field}\""));
                (field.to_string(), message)
            })
            .unwrap_or_else(|| ("unknown".to_string(), "Invalid request".to_string()));

        AppError::Core(CoreError::Field { message, field })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "No entry found for the given ID").into_response()
                }
                CoreError::Field { message, field } => (
                    StatusCode::BAD_REQUEST,
                    Json(FormError {
                        error_message: message,
                        field_name: field,
                    }),
                )
                    .into_response(),
                CoreError::Validation(message) => {
                    (StatusCode::BAD_REQUEST, message).into_response()
                }
                CoreError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            },
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred",
                )
                    .into_response()
            }
        }
    }
}
