//! Conversation-mode extraction: history in, typed profile out.

use std::sync::Arc;

use crate::llm::{LlmClient, ResponseFormat};
use crate::models::{Message, UserProfile};
use crate::schema::{profile_schema, validate, ValidationReport};

use super::parser::parse_record;
use super::prompt::conversation_extraction_messages;
use super::ExtractionError;

/// A profile that cleared the typed gate, with the advisory schema-walk
/// report alongside it. The advisory never blocks: with the typed gate in
/// front of it the report is empty in practice, and it is logged when not.
#[derive(Debug, Clone)]
pub struct ProfileExtraction {
    pub profile: UserProfile,
    pub advisory: ValidationReport,
}

/// Derives a candidate profile from conversation history via the LLM.
pub struct ProfileExtractor {
    llm: Arc<dyn LlmClient>,
}

impl ProfileExtractor {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// One extraction attempt over the full history.
    ///
    /// Recoverable failures (sentinel, bad JSON, typed-gate rejection) tell
    /// the caller to keep collecting; an `Llm` failure aborts the turn.
    pub fn extract(&self, history: &[Message]) -> Result<ProfileExtraction, ExtractionError> {
        let messages = conversation_extraction_messages(history);
        let raw = self.llm.complete(&messages, ResponseFormat::Json)?;

        let candidate = parse_record(&raw)?;
        let profile = UserProfile::from_value(&candidate)?;

        let advisory = validate(&candidate, &profile_schema());
        if !advisory.is_complete() {
            tracing::warn!(
                missing = ?advisory.missing,
                "Typed gate passed but schema walk flags paths"
            );
        }

        tracing::info!(id_number = %profile.id_number, "Extracted and validated user info");
        Ok(ProfileExtraction { profile, advisory })
    }
}
