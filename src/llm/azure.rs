//! Azure OpenAI chat-completions client.
//!
//! Blocking reqwest, bridged into async handlers with `spawn_blocking` at
//! the API layer. Every request pins temperature to 0 so extraction is as
//! reproducible as the provider allows.

use serde::{Deserialize, Serialize};

use crate::models::Message;

use super::{LlmClient, LlmError, ResponseFormat};

const API_VERSION: &str = "2024-02-15-preview";

pub struct AzureOpenAiClient {
    endpoint: String,
    api_key: String,
    deployment: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl AzureOpenAiClient {
    /// Build a client for one Azure OpenAI deployment.
    pub fn new(
        endpoint: &str,
        api_key: &str,
        deployment: &str,
        timeout_secs: u64,
    ) -> Result<Self, LlmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LlmError::Http(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            deployment: deployment.to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={API_VERSION}",
            self.endpoint, self.deployment
        )
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [Message],
    temperature: f32,
    response_format: FormatSpec,
}

#[derive(Serialize)]
struct FormatSpec {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl LlmClient for AzureOpenAiClient {
    fn complete(&self, messages: &[Message], format: ResponseFormat) -> Result<String, LlmError> {
        let body = CompletionRequest {
            messages,
            temperature: 0.0,
            response_format: FormatSpec {
                kind: match format {
                    ResponseFormat::Text => "text",
                    ResponseFormat::Json => "json_object",
                },
            },
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    LlmError::Connection(self.endpoint.clone())
                } else if e.is_timeout() {
                    LlmError::Timeout(self.timeout_secs)
                } else {
                    LlmError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("no choices in completion".into()))
    }
}
