use llm::{CompletionClient, LLMError};
use log::{debug, info, warn};
use memory::{EventKind, Memory, MAX_MEMORY_ITEMS};
use serde_json::Value;
use thiserror::Error;

use crate::generator::{self, ERROR_OUTPUT};
use crate::observer::{NoopObserver, PipelineObserver};
use crate::parser;
use crate::prompt_builder::{PlanBuilder, PlanTemplate, FALLBACK_PLAN, RECENT_TOPICS_IN_PLAN};
use crate::tracker;
use crate::types::ParsedRequest;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("completion API connection failed: {0}")]
    Connectivity(#[source] LLMError),
}

/// Knobs for a [`PromptAgent`].
#[derive(Clone, Debug)]
pub struct AgentSettings {
    pub model: String,
    pub memory_capacity: usize,
    pub plan_template: PlanTemplate,
}

impl AgentSettings {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            memory_capacity: MAX_MEMORY_ITEMS,
            plan_template: PlanTemplate::default(),
        }
    }

    pub fn memory_capacity(mut self, capacity: usize) -> Self {
        self.memory_capacity = capacity;
        self
    }

    pub fn plan_template(mut self, template: PlanTemplate) -> Self {
        self.plan_template = template;
        self
    }
}

/// Turns free-text writing requests into formatted writing prompts.
///
/// Each request runs through four stages in order: the input is parsed into
/// a [`ParsedRequest`], memory is updated with its niche and tone, a plan is
/// rendered from the request and recent topics, and the plan is sent back to
/// the model for the final prompts. Stage failures are recorded in the
/// session history and replaced by a fixed default, so [`PromptAgent::run`]
/// always produces a string.
pub struct PromptAgent<C> {
    client: C,
    settings: AgentSettings,
    memory: Memory,
}

impl<C: CompletionClient> PromptAgent<C> {
    /// Build an agent without contacting the service.
    pub fn new(client: C, settings: AgentSettings) -> Self {
        let memory = Memory::with_capacity(settings.memory_capacity);
        Self {
            client,
            settings,
            memory,
        }
    }

    /// Build an agent after confirming the service answers.
    pub async fn connect(client: C, settings: AgentSettings) -> Result<Self, AgentError> {
        let models = client.list_models().await.map_err(AgentError::Connectivity)?;
        info!("completion API reachable, {} models listed", models.len());
        if !models.is_empty() && !models.iter().any(|m| m == &settings.model) {
            warn!("model {} was not listed by the completion API", settings.model);
        }
        Ok(Self::new(client, settings))
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    async fn try_parse(&self, user_input: &str) -> Result<(Value, ParsedRequest), LLMError> {
        let request = parser::parse_request(&self.settings.model, user_input);
        let reply = self.client.complete(&request).await?;
        debug!("parse reply: {reply}");
        parser::parse_reply(&reply)
    }

    /// Extract niche, tone, constraints and audience from `user_input`.
    pub async fn parse_input(&mut self, user_input: &str) -> ParsedRequest {
        match self.try_parse(user_input).await {
            Ok((raw, parsed)) => {
                info!("input parsed");
                self.memory.log_event(EventKind::InputParsed, raw);
                parsed
            }
            Err(e) => {
                warn!("input parsing failed, using defaults: {e}");
                self.memory.log_event(EventKind::Error, e.to_string());
                ParsedRequest::fallback(e.to_string())
            }
        }
    }

    /// Remember the request's niche and tone.
    pub fn update_memory(&mut self, parsed: &ParsedRequest) -> &Memory {
        match tracker::stage_update(&self.memory, parsed) {
            Ok((staged, snapshot)) => {
                self.memory.commit(staged);
                self.memory.log_event(EventKind::MemoryUpdated, snapshot);
                info!("memory updated");
            }
            Err(e) => {
                warn!("memory update skipped: {e}");
                self.memory.log_event(EventKind::Error, e.to_string());
            }
        }
        &self.memory
    }

    /// Render the generation plan. Never touches the network.
    pub fn plan_prompts(&mut self, parsed: &ParsedRequest) -> String {
        let builder = PlanBuilder::new()
            .niche(parsed.niche.as_deref())
            .tone(parsed.tone.as_deref())
            .constraints(parsed.constraints.clone().unwrap_or_default())
            .audience(parsed.audience.as_deref());
        let builder = self
            .memory
            .preferences()
            .recent_topics
            .first(RECENT_TOPICS_IN_PLAN)
            .fold(builder, |b, topic| b.push_recent_topic(topic.clone()));
        match builder.build(&self.settings.plan_template) {
            Ok(plan) => {
                info!("plan created");
                self.memory.log_event(EventKind::PlanCreated, plan.clone());
                plan
            }
            Err(e) => {
                warn!("plan template failed, using fallback plan: {e}");
                self.memory.log_event(EventKind::Error, e.to_string());
                FALLBACK_PLAN.to_string()
            }
        }
    }

    /// Ask the model for the formatted prompts described by `plan`.
    pub async fn generate_output(&mut self, plan: &str) -> String {
        let request = generator::generate_request(&self.settings.model, plan);
        match self.client.complete(&request).await {
            Ok(output) => {
                // extraction failures are ignored without a history entry
                if let Some(topic) = generator::extract_main_topic(&output) {
                    self.memory.remember_topic(topic);
                }
                info!("output generated");
                self.memory.log_event(EventKind::OutputGenerated, output.clone());
                output
            }
            Err(e) => {
                warn!("prompt generation failed: {e}");
                self.memory.log_event(EventKind::Error, e.to_string());
                ERROR_OUTPUT.to_string()
            }
        }
    }

    /// Run the full pipeline for one request.
    pub async fn run(&mut self, user_input: &str) -> String {
        self.run_observed(user_input, &mut NoopObserver).await
    }

    /// [`PromptAgent::run`], reporting each intermediate result to `observer`.
    pub async fn run_observed(
        &mut self,
        user_input: &str,
        observer: &mut dyn PipelineObserver,
    ) -> String {
        info!("processing request: {user_input}");
        let parsed = self.parse_input(user_input).await;
        observer.input_parsed(&parsed);
        let memory = self.update_memory(&parsed);
        observer.memory_updated(memory);
        let plan = self.plan_prompts(&parsed);
        observer.plan_created(&plan);
        let output = self.generate_output(&plan).await;
        observer.output_generated(&output);
        output
    }
}
