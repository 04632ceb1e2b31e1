//! API error type and its HTTP mapping.
//!
//! | Variant      | Status | Body                                |
//! |--------------|--------|-------------------------------------|
//! | `Validation` | 422    | `{"errors": [msg, ...]}`            |
//! | `NotFound`   | 404    | `{"error": msg}`                    |
//! | `Database`   | 500    | `{"error": "Internal server error"}` |

use astra_core::CoreError;
use astra_db::error::DatabaseError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was understood but its content is invalid.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    /// Storage failure. Details are logged, never sent to the client.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation { message, .. } => Self::Validation(vec![message]),
            CoreError::NotFound { entity_type, id } => {
                tracing::warn!(%entity_type, %id, "lookup matched no row");
                Self::NotFound(format!("{entity_type} not found"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "errors": errors })))
                    .into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            Self::Database(error) => {
                tracing::error!(%error, "database error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
