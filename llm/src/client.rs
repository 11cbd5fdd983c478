//! HTTP client for an OpenAI-compatible chat completion service.
//!
//! [`OpenAIClient`] implements [`CompletionClient`] on top of
//! `POST {base_url}/chat/completions` and `GET {base_url}/models`, sending the
//! API key as a bearer token.

use crate::runner::ClientConfig;
use crate::traits::{ChatMessage, CompletionClient, CompletionRequest, LLMError, ResponseFormat};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

pub struct OpenAIClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAIClient {
    /// Build a client without a request timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from a loaded [`ClientConfig`], honouring its timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, LLMError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            base_url: trim_base(config.base_url.clone()),
            api_key: config.api_key.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[derive(Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<WireFormat>,
}

#[derive(Serialize)]
struct WireFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireMessage,
}

#[derive(Deserialize)]
struct WireMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    id: String,
}

/// Turn a non-success response into [`LLMError::Api`], preferring the
/// service's own `error.message` when present.
async fn api_error(resp: reqwest::Response) -> LLMError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or(body);
    LLMError::Api { status, message }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = WireRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            response_format: match request.response_format {
                ResponseFormat::Text => None,
                ResponseFormat::JsonObject => Some(WireFormat { kind: "json_object" }),
            },
        };
        debug!("POST {url} model={} temperature={}", request.model, request.temperature);
        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }
        let parsed: WireResponse = resp
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LLMError::EmptyCompletion)
    }

    async fn list_models(&self) -> Result<Vec<String>, LLMError> {
        let url = format!("{}/models", self.base_url);
        debug!("GET {url}");
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }
        let list: ModelList = resp
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;
        Ok(list.data.into_iter().map(|m| m.id).collect())
    }
}
