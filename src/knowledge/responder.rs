//! Answers member questions strictly from the loaded corpus.

use std::sync::Arc;

use crate::language::Language;
use crate::llm::{LlmClient, LlmError, ResponseFormat};
use crate::models::{Message, UserProfile};

use super::KnowledgeCorpus;

/// Knowledge-grounded question answering for a confirmed member.
pub struct Responder {
    llm: Arc<dyn LlmClient>,
}

impl Responder {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// One question, one answer. The grounding instruction binds the
    /// answer to the corpus, personalizes on HMO and tier, and requires
    /// an explicit refusal when the corpus has nothing.
    pub fn answer(
        &self,
        profile: &UserProfile,
        history: &[Message],
        question: &str,
        corpus: &KnowledgeCorpus,
        language: Language,
    ) -> Result<String, LlmError> {
        let mut messages = vec![Message::system(grounding_prompt(profile, corpus, language))];
        messages.extend_from_slice(history);
        messages.push(Message::user(question));

        let answer = self.llm.complete(&messages, ResponseFormat::Text)?;
        tracing::info!(
            first_name = %profile.first_name,
            id_number = %profile.id_number,
            "Answered question"
        );
        Ok(answer)
    }
}

fn grounding_prompt(profile: &UserProfile, corpus: &KnowledgeCorpus, language: Language) -> String {
    format!(
        "You are a helpful assistant for members of {}. \
The user's current insurance tier is: {}. \
Answer the user's questions in {}, based *only* on the information provided \
in the HTML knowledge base below. \
If the answer is not in the knowledge base, state that you do not have that information.\n\n\
--- KNOWLEDGE BASE START ---\n{}\n--- KNOWLEDGE BASE END ---",
        profile.hmo,
        profile.tier,
        language.instruction_name(),
        corpus.text(),
    )
}
