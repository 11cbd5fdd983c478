use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::{CompletionClient, CompletionRequest, LLMError};

/// In-memory [`CompletionClient`] that replays scripted replies in order and
/// records every request it receives. Used in tests.
#[derive(Default)]
pub struct MockCompletionClient {
    replies: Mutex<VecDeque<Result<String, LLMError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
    models: Vec<String>,
    offline: bool,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            models: vec!["mock-model".into()],
            ..Default::default()
        }
    }

    /// Queue a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a failing reply.
    pub fn with_error(self, err: LLMError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    /// Make [`CompletionClient::list_models`] fail.
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LLMError::Network("no scripted reply left".into())))
    }

    async fn list_models(&self) -> Result<Vec<String>, LLMError> {
        if self.offline {
            return Err(LLMError::Network("connection refused".into()));
        }
        Ok(self.models.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_in_order_then_fails() {
        let client = MockCompletionClient::new()
            .with_reply("one")
            .with_error(LLMError::EmptyCompletion);
        let req = CompletionRequest::new("m", "sys", "hi");
        assert_eq!(client.complete(&req).await.unwrap(), "one");
        assert_eq!(client.complete(&req).await, Err(LLMError::EmptyCompletion));
        assert!(matches!(client.complete(&req).await, Err(LLMError::Network(_))));
        assert_eq!(client.requests().len(), 3);
    }

    #[tokio::test]
    async fn offline_fails_model_listing() {
        let client = MockCompletionClient::new().offline();
        assert!(client.list_models().await.is_err());
        assert_eq!(
            MockCompletionClient::new().list_models().await.unwrap(),
            vec!["mock-model".to_string()]
        );
    }
}
