//! Shared handler state and the wire payloads.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::conversation::{ChatEngine, Phase};
use crate::extraction::FormExtractor;
use crate::knowledge::Responder;
use crate::language::Language;
use crate::llm::LlmClient;
use crate::models::{Message, UserProfile};

/// Everything a handler needs, built once at startup. The LLM client is
/// injected so tests run the full stack against a mock.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    pub responder: Arc<Responder>,
    pub form_extractor: Arc<FormExtractor>,
    pub knowledge_base_dir: PathBuf,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>, knowledge_base_dir: PathBuf) -> Self {
        Self {
            engine: Arc::new(ChatEngine::new(llm.clone())),
            responder: Arc::new(Responder::new(llm.clone())),
            form_extractor: Arc::new(FormExtractor::new(llm)),
            knowledge_base_dir,
        }
    }
}

fn default_language() -> String {
    "en".into()
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub history: Vec<Message>,
    #[serde(default)]
    pub user_info: Option<UserProfile>,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub phase: Phase,
    pub assistant: String,
    pub user_info: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub user_info: UserProfile,
    pub history: Vec<Message>,
    pub new_message: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub assistant: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    /// Detected from the text when omitted.
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub language: Language,
    pub record: serde_json::Value,
    pub missing: Vec<String>,
}
