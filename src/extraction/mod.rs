//! Structured extraction: free text in, validated record out.
//!
//! The LLM reply is never trusted. A reply goes through the sentinel check, the JSON
//! parse, and the typed gate, and each step failing is an expected, recoverable outcome
//! that keeps the conversation collecting.

pub mod conversation;
pub mod form;
pub mod parser;
pub mod prompt;

pub use conversation::{ProfileExtraction, ProfileExtractor};
pub use form::{FormExtraction, FormExtractor};
pub use parser::parse_record;

use crate::llm::LlmError;
use crate::models::ProfileError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The extractor answered the insufficient-information sentinel.
    #[error("conversation does not yet contain the full record")]
    InsufficientInfo,

    /// The extractor's reply was not parseable JSON.
    #[error("extractor returned unparseable JSON: {0}")]
    MalformedJson(String),

    /// Parsed fine, but a field is missing, ill-typed, or out of format.
    #[error("extracted record failed validation: {0}")]
    InvalidRecord(#[from] ProfileError),

    /// The completion call itself failed. Not an extraction outcome;
    /// propagated to the request boundary without touching the phase.
    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl ExtractionError {
    /// Recoverable failures keep the conversation in `collecting`;
    /// an LLM failure aborts the turn instead.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ExtractionError::Llm(_))
    }
}
