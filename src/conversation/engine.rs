//! One collecting/confirming turn, end to end.
//!
//! The engine decides between two outcomes per turn: a successful
//! extraction produces the locally-rendered confirmation summary, a
//! recoverable extraction failure produces the next collection question
//! from the LLM. Only a completion failure aborts the turn, and nothing
//! about the conversation advances when it does.

use std::sync::Arc;

use crate::extraction::{ExtractionError, ProfileExtractor};
use crate::language::Language;
use crate::llm::{LlmClient, LlmError, ResponseFormat};
use crate::models::{Message, UserProfile};

use super::phase::{Phase, TurnEvent};
use super::texts;

/// What a `/chat` turn hands back to the caller.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub phase: Phase,
    pub assistant: String,
    /// The candidate profile when the turn reached `Confirming`.
    pub profile: Option<UserProfile>,
}

pub struct ChatEngine {
    llm: Arc<dyn LlmClient>,
    extractor: ProfileExtractor,
}

impl ChatEngine {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        let extractor = ProfileExtractor::new(llm.clone());
        Self { llm, extractor }
    }

    /// Run one turn of the collection conversation over the full history.
    pub fn collect_turn(
        &self,
        history: &[Message],
        language: Language,
    ) -> Result<ChatTurn, LlmError> {
        match self.extractor.extract(history) {
            Ok(extraction) => {
                let assistant = texts::confirmation_summary(&extraction.profile, language);
                Ok(ChatTurn {
                    phase: Phase::Collecting.next(TurnEvent::ExtractionSucceeded),
                    assistant,
                    profile: Some(extraction.profile),
                })
            }
            Err(ExtractionError::Llm(e)) => Err(e),
            Err(reason) => {
                tracing::info!(%reason, "Could not extract user info yet, continuing conversation");
                let assistant = self.collection_reply(history, language)?;
                Ok(ChatTurn {
                    phase: Phase::Collecting.next(TurnEvent::ExtractionFailed),
                    assistant,
                    profile: None,
                })
            }
        }
    }

    /// Ask the LLM for the next collection question.
    fn collection_reply(
        &self,
        history: &[Message],
        language: Language,
    ) -> Result<String, LlmError> {
        let mut messages = vec![Message::system(texts::collection_system_prompt(language))];
        messages.extend_from_slice(history);
        self.llm.complete(&messages, ResponseFormat::Text)
    }
}
