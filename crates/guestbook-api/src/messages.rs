use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::warn;
use uuid::Uuid;

use guestbook_db::models::MessageRow;
use guestbook_types::api::{CreateMessageRequest, MessageResponse};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let db = state.connections.get().await.map_err(ApiError::FetchMessages)?;
    let limit = state.list_limit;

    // Run blocking DB reads off the async runtime
    let rows = tokio::task::spawn_blocking(move || db.list_recent(limit))
        .await
        .map_err(|e| ApiError::FetchMessages(e.into()))?
        .map_err(ApiError::FetchMessages)?;

    let messages: Vec<MessageResponse> = rows.into_iter().map(to_response).collect();
    Ok(Json(messages))
}

pub async fn create_message(
    State(state): State<AppState>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Reject before touching the store; the store re-checks on insert.
    if req.name.is_empty() || req.message.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let db = state.connections.get().await.map_err(ApiError::CreateMessage)?;

    // Run the blocking insert off the async runtime
    let row = tokio::task::spawn_blocking(move || {
        db.insert_message(&req.name, req.email.as_deref(), &req.message)
    })
    .await
    .map_err(|e| ApiError::CreateMessage(e.into()))?
    .map_err(ApiError::CreateMessage)?;

    Ok((StatusCode::CREATED, Json(to_response(row))))
}

fn to_response(row: MessageRow) -> MessageResponse {
    MessageResponse {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt message id '{}': {}", row.id, e);
            Uuid::default()
        }),
        created_at: row
            .created_at
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap_or_else(|e| {
                warn!("Corrupt created_at '{}' on message '{}': {}", row.created_at, row.id, e);
                chrono::DateTime::default()
            }),
        name: row.name,
        email: row.email,
        message: row.body,
    }
}
