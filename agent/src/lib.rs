//! Writing-prompt agent.
//!
//! [`PromptAgent`] sequences two calls to a chat completion service around a
//! small rolling [`Memory`](memory::Memory):
//!
//! 1. [`parser`] turns the user's request into a [`ParsedRequest`];
//! 2. [`tracker`] records its niche and tone;
//! 3. [`prompt_builder`] renders a generation plan;
//! 4. [`generator`] asks for the formatted prompts and remembers their topic.
//!
//! ```ignore
//! use agent::{AgentSettings, PromptAgent};
//! use llm::MockCompletionClient;
//!
//! let client = MockCompletionClient::new()
//!     .with_reply(r#"{"niche":"food","tone":"humorous"}"#)
//!     .with_reply("**Vegan Croissant Chaos**\n- ...");
//! let mut agent = PromptAgent::new(client, AgentSettings::new("gpt-3.5-turbo"));
//! let prompts = agent.run("Give me a funny prompt about vegan baking").await;
//! ```

pub mod agent;
pub mod generator;
pub mod observer;
pub mod parser;
pub mod prompt_builder;
pub mod tracker;
pub mod types;

pub use agent::{AgentError, AgentSettings, PromptAgent};
pub use generator::{extract_main_topic, ERROR_OUTPUT};
pub use observer::{NoopObserver, PipelineObserver};
pub use prompt_builder::{PlanBuilder, PlanError, PlanTemplate, DEFAULT_PLAN_TEMPLATE, FALLBACK_PLAN};
pub use types::ParsedRequest;
