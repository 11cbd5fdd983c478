use indoc::indoc;
use llm::{CompletionRequest, LLMError};
use serde_json::Value;

use crate::types::ParsedRequest;

pub const PARSE_TEMPERATURE: f32 = 0.3;

pub const PARSE_INSTRUCTION: &str = indoc! {
    "Analyze the writing prompt request and return JSON with:
    - niche (e.g., food, tech)
    - tone (e.g., serious, humorous)
    - constraints (list)
    - audience (if mentioned)"
};

/// JSON-mode request asking the model to break `user_input` into fields.
pub fn parse_request(model: &str, user_input: &str) -> CompletionRequest {
    CompletionRequest::new(model, PARSE_INSTRUCTION, user_input)
        .temperature(PARSE_TEMPERATURE)
        .json_object()
}

/// Decode the model's reply. Anything but a JSON object is rejected.
///
/// Returns the raw object alongside the lenient [`ParsedRequest`] reading of
/// it so the caller can log exactly what the model said.
pub fn parse_reply(reply: &str) -> Result<(Value, ParsedRequest), LLMError> {
    let value: Value = serde_json::from_str(reply.trim())
        .map_err(|e| LLMError::InvalidResponse(format!("reply is not JSON: {e}")))?;
    match value {
        Value::Object(object) => {
            let parsed = ParsedRequest::from_object(object.clone());
            Ok((Value::Object(object), parsed))
        }
        other => Err(LLMError::InvalidResponse(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}
