//! `POST /chat`: one turn of the collection conversation.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{AppState, ChatRequest, ChatResponse};
use crate::language::Language;

/// Runs extraction over the submitted history and replies with either the
/// confirmation summary (phase `confirming`, candidate attached) or the
/// next collection question (phase `collecting`).
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let language = Language::from_tag(&req.language);
    let engine = state.engine.clone();
    let history = req.history;

    let turn = tokio::task::spawn_blocking(move || engine.collect_turn(&history, language))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(ChatResponse {
        phase: turn.phase,
        assistant: turn.assistant,
        user_info: turn.profile,
    }))
}
