//! The LLM as an opaque `(messages) → text` capability.
//!
//! Callers never assume the returned text is well-formed; everything that
//! expects structure routes the reply through the extraction parser. The
//! trait exists so tests substitute `MockLlmClient` for the network.

pub mod azure;

pub use azure::AzureOpenAiClient;

use std::sync::Mutex;

use crate::models::Message;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("cannot reach the completion endpoint at {0}")]
    Connection(String),

    #[error("completion request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("completion service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Requested shape of the completion output.
///
/// `Json` asks the provider to constrain decoding to a JSON object; the
/// reply still goes through parse-or-fail, constrained decoding is a bias,
/// not a guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Text,
    Json,
}

/// Role-tagged completion boundary. One call per conversation turn.
pub trait LlmClient: Send + Sync {
    fn complete(&self, messages: &[Message], format: ResponseFormat) -> Result<String, LlmError>;
}

/// Scripted LLM for tests: replies are consumed in order (the last one
/// repeats), and every request is recorded for prompt assertions.
pub struct MockLlmClient {
    replies: Mutex<Vec<String>>,
    requests: Mutex<Vec<(Vec<Message>, ResponseFormat)>>,
}

impl MockLlmClient {
    pub fn new(reply: &str) -> Self {
        Self::with_replies(vec![reply.to_string()])
    }

    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Everything sent to the mock so far.
    pub fn requests(&self) -> Vec<(Vec<Message>, ResponseFormat)> {
        self.requests.lock().expect("mock lock").clone()
    }
}

impl LlmClient for MockLlmClient {
    fn complete(&self, messages: &[Message], format: ResponseFormat) -> Result<String, LlmError> {
        self.requests
            .lock()
            .expect("mock lock")
            .push((messages.to_vec(), format));
        let mut replies = self.replies.lock().expect("mock lock");
        let reply = if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies
                .first()
                .cloned()
                .unwrap_or_default()
        };
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_configured_reply() {
        let client = MockLlmClient::new("hello");
        let reply = client
            .complete(&[Message::user("hi")], ResponseFormat::Text)
            .unwrap();
        assert_eq!(reply, "hello");
    }

    #[test]
    fn mock_consumes_scripted_replies_in_order() {
        let client = MockLlmClient::with_replies(vec!["one".into(), "two".into()]);
        assert_eq!(
            client.complete(&[], ResponseFormat::Text).unwrap(),
            "one"
        );
        assert_eq!(
            client.complete(&[], ResponseFormat::Text).unwrap(),
            "two"
        );
        // Last reply repeats
        assert_eq!(
            client.complete(&[], ResponseFormat::Text).unwrap(),
            "two"
        );
    }

    #[test]
    fn mock_records_requests() {
        let client = MockLlmClient::new("x");
        client
            .complete(&[Message::system("sys")], ResponseFormat::Json)
            .unwrap();
        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0[0].content, "sys");
        assert_eq!(requests[0].1, ResponseFormat::Json);
    }
}
