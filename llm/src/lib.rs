//! Abstractions for talking to chat completion services.
//!
//! The `llm` crate defines the [`CompletionClient`] trait along with the
//! [`OpenAIClient`] HTTP implementation, a scripted
//! [`MockCompletionClient`] for tests and helpers that load connection
//! settings from the environment.

pub mod client;
pub mod mock;
pub mod runner;
pub mod traits;

pub use client::OpenAIClient;
pub use mock::MockCompletionClient;
pub use runner::{client_from_env, client_from_lookup, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use traits::{ChatMessage, CompletionClient, CompletionRequest, LLMError, ResponseFormat, Role};
