//! `POST /extract`: fill the National Insurance form schema from
//! document text (the OCR step runs upstream of this service).

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{AppState, ExtractRequest, ExtractResponse};
use crate::language::{detect_language, Language};

pub async fn extract(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Form text cannot be empty".into()));
    }

    let language = match req.language.as_deref() {
        Some(tag) => Language::from_tag(tag),
        None => detect_language(&req.text),
    };

    let extractor = state.form_extractor.clone();
    let text = req.text;
    let extraction = tokio::task::spawn_blocking(move || extractor.extract(&text, language))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(ExtractResponse {
        language: extraction.language,
        record: extraction.record,
        missing: extraction.report.missing,
    }))
}
