use serde::Serialize;
use serde_json::{Map, Value};

/// Structured reading of a free-text writing request.
///
/// Built leniently from whatever JSON object the completion API returns:
/// every field is optional and unknown keys are carried in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParsedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParsedRequest {
    /// Default reading used when the request could not be parsed.
    pub fn fallback(error: impl Into<String>) -> Self {
        Self {
            niche: Some("general".into()),
            tone: Some("neutral".into()),
            constraints: Some(Vec::new()),
            audience: None,
            error: Some(error.into()),
            extra: Map::new(),
        }
    }

    /// Read fields out of an untrusted JSON object.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let niche = object.remove("niche").and_then(text);
        let tone = object.remove("tone").and_then(text);
        let audience = object.remove("audience").and_then(text);
        let error = object.remove("error").and_then(text);
        let constraints = object.remove("constraints").and_then(|v| match v {
            Value::Null => None,
            Value::Array(items) => Some(items.into_iter().filter_map(text).collect()),
            other => text(other).map(|c| vec![c]),
        });
        Self {
            niche,
            tone,
            constraints,
            audience,
            error,
            extra: object,
        }
    }
}

/// Strings pass through, `null` is absent, anything else keeps its JSON text.
fn text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn reads_known_fields() {
        let parsed = ParsedRequest::from_object(object(json!({
            "niche": "food",
            "tone": "humorous",
            "constraints": ["vegan", "Instagram"],
            "audience": "home bakers"
        })));
        assert_eq!(parsed.niche.as_deref(), Some("food"));
        assert_eq!(parsed.tone.as_deref(), Some("humorous"));
        assert_eq!(
            parsed.constraints,
            Some(vec!["vegan".to_string(), "Instagram".to_string()])
        );
        assert_eq!(parsed.audience.as_deref(), Some("home bakers"));
        assert!(parsed.extra.is_empty());
    }

    #[test]
    fn tolerates_odd_shapes() {
        let parsed = ParsedRequest::from_object(object(json!({
            "niche": 42,
            "tone": null,
            "constraints": "under 100 words",
            "platform": "Instagram"
        })));
        assert_eq!(parsed.niche.as_deref(), Some("42"));
        assert_eq!(parsed.tone, None);
        assert_eq!(parsed.constraints, Some(vec!["under 100 words".to_string()]));
        assert_eq!(parsed.extra.get("platform"), Some(&json!("Instagram")));
    }

    #[test]
    fn serializes_back_to_object() {
        let parsed = ParsedRequest::from_object(object(json!({
            "niche": "tech",
            "platform": "blog"
        })));
        let v = serde_json::to_value(&parsed).unwrap();
        assert_eq!(v, json!({"niche": "tech", "platform": "blog"}));
    }

    #[test]
    fn fallback_shape() {
        let v = serde_json::to_value(ParsedRequest::fallback("boom")).unwrap();
        assert_eq!(
            v,
            json!({"niche": "general", "tone": "neutral", "constraints": [], "error": "boom"})
        );
    }
}
