use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// Shape of the reply requested from the completion API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Text,
    JsonObject,
}

/// A single non-streaming chat completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    /// Create a request carrying a system instruction followed by a user message.
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: 1.0,
            response_format: ResponseFormat::Text,
        }
    }

    pub fn temperature(mut self, value: f32) -> Self {
        self.temperature = value;
        self
    }

    pub fn json_object(mut self) -> Self {
        self.response_format = ResponseFormat::JsonObject;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum LLMError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("completion contained no content")]
    EmptyCompletion,
    #[error("{0} not found in environment variables")]
    MissingCredential(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for LLMError {
    fn from(e: reqwest::Error) -> Self {
        LLMError::Network(e.to_string())
    }
}

/// Request/response interface to a remote text-completion service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run a completion and return the text of the first choice.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError>;

    /// Identifiers of the models the service exposes. Doubles as a
    /// connectivity check.
    async fn list_models(&self) -> Result<Vec<String>, LLMError>;
}

#[async_trait]
impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError> {
        (**self).complete(request).await
    }

    async fn list_models(&self) -> Result<Vec<String>, LLMError> {
        (**self).list_models().await
    }
}
