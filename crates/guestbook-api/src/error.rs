use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use guestbook_db::Error as StoreError;

/// Boundary errors. The display strings are exactly what clients see; the
/// underlying cause is logged server-side, never serialized.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Name and message are required")]
    MissingFields,

    #[error("Failed to fetch messages")]
    FetchMessages(#[source] StoreError),

    #[error("Failed to create message")]
    CreateMessage(#[source] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingFields => (StatusCode::BAD_REQUEST, self.to_string()),
            // Store-level validation is still the client's mistake.
            ApiError::CreateMessage(StoreError::Validation(reason)) => {
                (StatusCode::BAD_REQUEST, (*reason).to_string())
            }
            ApiError::FetchMessages(source) | ApiError::CreateMessage(source) => {
                error!("{}: {}", self, source);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
