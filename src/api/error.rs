//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::knowledge::KnowledgeError;
use crate::llm::LlmError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// Request-boundary errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("upstream completion failure: {0}")]
    UpstreamLlm(String),

    #[error("knowledge base not found: {0}")]
    KnowledgeBaseMissing(String),

    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::UpstreamLlm(detail) => {
                tracing::error!(detail, "LLM call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_LLM",
                    "Failed to get a response from the language model".to_string(),
                )
            }
            ApiError::KnowledgeBaseMissing(detail) => (
                StatusCode::NOT_FOUND,
                "KB_NOT_FOUND",
                detail.clone(),
            ),
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                detail.clone(),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        ApiError::UpstreamLlm(err.to_string())
    }
}

impl From<KnowledgeError> for ApiError {
    fn from(err: KnowledgeError) -> Self {
        match &err {
            KnowledgeError::NoDocuments(_) => ApiError::KnowledgeBaseMissing(err.to_string()),
            KnowledgeError::Io { .. } => ApiError::Internal(err.to_string()),
        }
    }
}
