//! Blocking chat-completion client for the xAI API.
//!
//! The endpoint is OpenAI-compatible: role-tagged messages go in, a list
//! of choices comes back. Exactly one request is made per generation run;
//! a failed call is surfaced to the operator instead of retried.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{self, GeneratorConfig};
use crate::error::{GeneratorError, Result};

/// User agent identifying this tool to the API.
const USER_AGENT: &str = concat!("austin-attractions/", env!("CARGO_PKG_VERSION"));

/// Role of a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request for a single chat completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Conversation messages, system instruction first.
    pub messages: Vec<Message>,
    /// Token budget for the completion.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Response from a single chat completion.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Text content of the first choice.
    pub content: String,
    /// Input tokens consumed.
    pub prompt_tokens: u64,
    /// Output tokens generated.
    pub completion_tokens: u64,
}

/// Trait for chat-completion backends. Enables mocking in tests.
pub trait ChatCompletion: Send + Sync {
    /// Send one completion request and return the model's answer.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success API status,
    /// or an empty completion.
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

// Wire format for the chat-completions endpoint.

#[derive(Serialize)]
struct XaiRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f64,
    response_format: ResponseFormat,
}

/// Directive asking the endpoint for well-formed JSON output.
#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct XaiResponse {
    choices: Vec<XaiChoice>,
    #[serde(default)]
    usage: Option<XaiUsage>,
}

#[derive(Deserialize)]
struct XaiChoice {
    message: XaiChoiceMessage,
}

#[derive(Deserialize)]
struct XaiChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize, Default)]
struct XaiUsage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

#[derive(Deserialize)]
struct XaiErrorResponse {
    error: Option<XaiErrorDetail>,
}

#[derive(Deserialize)]
struct XaiErrorDetail {
    message: String,
}

/// Client for the xAI chat-completions endpoint.
///
/// NOTE: Do NOT derive `Debug` on this struct - `api_key` would be exposed
/// in debug output.
pub struct XaiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    url: String,
    model: String,
}

impl XaiClient {
    /// Create a client from configuration.
    ///
    /// The credential comes from the config, never from the process
    /// environment, so tests and embedders can inject one explicitly.
    ///
    /// # Errors
    /// Returns `GeneratorError::Config` for a blank API key, or
    /// `GeneratorError::Request` if the HTTP client cannot be built.
    pub fn new(cfg: &GeneratorConfig) -> Result<Self> {
        if cfg.api_key.trim().is_empty() {
            return Err(GeneratorError::Config(
                "API key must not be empty".to_string(),
            ));
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_key: cfg.api_key.clone(),
            url: config::chat_completions_url(&cfg.api_base_url),
            model: cfg.model.clone(),
        })
    }
}

impl ChatCompletion for XaiClient {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let body = XaiRequest {
            model: &self.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        debug!(url = %self.url, model = %self.model, "sending chat completion request");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().unwrap_or_default();
            // Error bodies follow {"error": {"message": ...}}, but fall
            // back to the raw body for anything else.
            let message = serde_json::from_str::<XaiErrorResponse>(&body_text)
                .ok()
                .and_then(|parsed| parsed.error)
                .map_or(body_text, |detail| detail.message);
            return Err(GeneratorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: XaiResponse = response.json()?;
        let usage = api_response.usage.unwrap_or_default();
        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }

        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "received chat completion response"
        );

        Ok(ChatResponse {
            content,
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
        })
    }
}

/// Test utilities for components that depend on a chat-completion client.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{ChatCompletion, ChatRequest, ChatResponse};
    use crate::error::{GeneratorError, Result};

    /// Mock client returning canned responses in order and recording every
    /// request it receives.
    pub struct MockChatClient {
        responses: Mutex<Vec<Result<ChatResponse>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl MockChatClient {
        /// Create a mock that plays back `responses` in order.
        pub fn new(mut responses: Vec<Result<ChatResponse>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Shorthand for a mock answering once with `content`.
        pub fn with_content(content: &str) -> Self {
            Self::new(vec![Ok(ChatResponse {
                content: content.to_string(),
                prompt_tokens: 100,
                completion_tokens: 500,
            })])
        }

        /// Number of `complete` calls made so far.
        pub fn calls(&self) -> usize {
            self.requests.lock().map(|requests| requests.len()).unwrap_or(0)
        }

        /// Requests recorded so far, oldest first.
        pub fn requests(&self) -> Vec<ChatRequest> {
            self.requests
                .lock()
                .map(|requests| requests.clone())
                .unwrap_or_default()
        }
    }

    impl ChatCompletion for MockChatClient {
        fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request.clone());
            }
            let mut responses = self
                .responses
                .lock()
                .map_err(|e| GeneratorError::Config(format!("mock lock poisoned: {e}")))?;
            responses
                .pop()
                .unwrap_or(Err(GeneratorError::EmptyResponse))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::MockChatClient;

    fn sample_request() -> ChatRequest {
        ChatRequest {
            messages: vec![
                Message::system("You are a test assistant."),
                Message::user("Say hello."),
            ],
            max_tokens: 8000,
            temperature: 0.7,
        }
    }

    #[test]
    fn test_create_client() {
        let cfg = GeneratorConfig::builder("test-key").build();
        assert!(XaiClient::new(&cfg).is_ok());
    }

    #[test]
    fn test_create_client_rejects_blank_key() {
        let cfg = GeneratorConfig::builder("   ").build();
        // XaiClient carries no Debug impl, so destructure instead of unwrap_err
        let Err(err) = XaiClient::new(&cfg) else {
            panic!("blank key must be rejected");
        };
        assert!(matches!(err, GeneratorError::Config(_)));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    }

    #[test]
    fn test_request_wire_format() {
        let request = sample_request();
        let body = XaiRequest {
            model: "grok-3",
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "grok-3");
        assert_eq!(value["max_tokens"], 8000);
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "Say hello.");
    }

    #[test]
    fn test_response_envelope_parsing() {
        let json = r#"{
            "id": "cmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "[]"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }"#;
        let parsed: XaiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("[]"));
        assert_eq!(parsed.usage.unwrap_or_default().prompt_tokens, 10);
    }

    #[test]
    fn test_error_body_parsing() {
        let json = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let parsed: XaiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.error.map(|detail| detail.message).as_deref(),
            Some("Incorrect API key provided")
        );
    }

    #[test]
    fn test_mock_records_requests() {
        let mock = MockChatClient::with_content("[]");
        let request = sample_request();

        let response = mock.complete(&request).unwrap();
        assert_eq!(response.content, "[]");
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.requests()[0].max_tokens, 8000);
    }

    #[test]
    fn test_mock_exhausted_returns_error() {
        let mock = MockChatClient::new(Vec::new());
        let err = mock.complete(&sample_request()).unwrap_err();
        assert!(matches!(err, GeneratorError::EmptyResponse));
    }
}
