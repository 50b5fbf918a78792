//! Groq chat completions client.
//!
//! Groq exposes the OpenAI chat completions API; this module is the thin
//! request/response codec plus one blocking call.

use reqwest::{
    Client, StatusCode,
    header::{self, HeaderMap, HeaderValue, InvalidHeaderValue},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Groq's OpenAI-compatible chat completions endpoint.
pub const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Errors raised by the provider call chain.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid credential: {0}")]
    Credential(#[from] InvalidHeaderValue),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed completion: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A chat message in the provider wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// The role of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Chat completion request body.
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
}

/// Chat completion response body, reduced to the fields this service reads.
#[derive(Debug, Deserialize)]
pub struct Completion {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

impl Completion {
    /// Text of the first choice, if the provider returned one.
    pub fn content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

/// An HTTP client bound to one chat completions endpoint.
#[derive(Clone, Debug)]
pub struct GroqClient {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
}

impl GroqClient {
    /// Create a client for the hosted Groq API.
    pub fn new(client: Client, key: &str) -> Result<Self, ProviderError> {
        Self::custom(client, key, GROQ_ENDPOINT)
    }

    /// Create a client against a custom OpenAI-compatible endpoint.
    pub fn custom(client: Client, key: &str, endpoint: &str) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(Self {
            client,
            headers,
            endpoint: endpoint.to_owned(),
        })
    }

    /// Send one chat completion request and wait for the full reply.
    pub async fn send(&self, request: &CompletionRequest) -> Result<Completion, ProviderError> {
        tracing::debug!("request: {}", serde_json::to_string(request)?);
        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("response ({status}): {text}");

        if !status.is_success() {
            return Err(ProviderError::Status { status, body: text });
        }
        serde_json::from_str(&text).map_err(Into::into)
    }
}
