//! `POST /ask`: knowledge-grounded question answering.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{AppState, AskRequest, AskResponse};
use crate::knowledge::KnowledgeCorpus;
use crate::language::Language;

/// Loads the corpus, then asks the responder one question on behalf of
/// the confirmed member. The corpus is read per request so a missing or
/// empty deployment fails loudly instead of answering from nothing.
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    if req.new_message.trim().is_empty() {
        return Err(ApiError::BadRequest("Question cannot be empty".into()));
    }

    let language = Language::from_tag(&req.language);
    let responder = state.responder.clone();
    let kb_dir = state.knowledge_base_dir.clone();

    let assistant = tokio::task::spawn_blocking(move || -> Result<String, ApiError> {
        let corpus = KnowledgeCorpus::load(&kb_dir)?;
        let answer = responder.answer(
            &req.user_info,
            &req.history,
            &req.new_message,
            &corpus,
            language,
        )?;
        Ok(answer)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(AskResponse { assistant }))
}
