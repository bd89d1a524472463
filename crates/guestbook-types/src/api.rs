use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- Messages --

/// Body of `POST /messages`. The boundary field is called `message`; it maps to
/// the `body` column of the stored record. Absent `name`/`message` deserialize
/// to empty strings so the handler can reject them with the canonical
/// "Name and message are required" response instead of a serde error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
