use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use super::save::save_document;
use crate::config::ServerConfig;

// ============================================================
// Responses
// ============================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    Success,
    Error,
}

/// Body of every `/save` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub status: SaveStatus,
    pub message: String,
}

impl SaveResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            status: SaveStatus::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: SaveStatus::Error,
            message: message.into(),
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Save
// ============================================================

/// Accept a full document and persist it to the configured data file.
///
/// The body is read as raw bytes so malformed JSON gets the same structured
/// error response as every other failure.
pub async fn save(
    State(config): State<ServerConfig>,
    body: Bytes,
) -> (StatusCode, Json<SaveResponse>) {
    match save_document(&config.data_file, &body) {
        Ok(()) => {
            tracing::info!("Data saved to {}", config.data_file.display());
            (
                StatusCode::OK,
                Json(SaveResponse::success("Data saved successfully")),
            )
        }
        Err(e) => {
            tracing::error!("Error saving data: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveResponse::error(e.to_string())),
            )
        }
    }
}

/// Bare `OPTIONS /save`. Requests carrying CORS preflight headers are
/// answered by the CORS layer before reaching this.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

// ============================================================
// Fallback
// ============================================================

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "File not found")
}
