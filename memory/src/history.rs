use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

/// Kind of pipeline event recorded in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    InputParsed,
    MemoryUpdated,
    PlanCreated,
    OutputGenerated,
    Error,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::InputParsed => "input_parsed",
            EventKind::MemoryUpdated => "memory_updated",
            EventKind::PlanCreated => "plan_created",
            EventKind::OutputGenerated => "output_generated",
            EventKind::Error => "error",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub data: Value,
    pub timestamp: String,
}

/// Append-only log of everything that happened during one agent's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SessionHistory {
    events: Vec<SessionEvent>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event stamped with the current UTC time.
    pub fn record(&mut self, kind: EventKind, data: impl Into<Value>) {
        self.events.push(SessionEvent {
            kind,
            data: data.into(),
            timestamp: Utc::now().to_rfc3339(),
        });
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.iter().map(|e| e.kind).collect()
    }

    pub fn last(&self) -> Option<&SessionEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
