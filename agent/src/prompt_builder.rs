use indoc::indoc;
use thiserror::Error;

/// Plan used when the template cannot be rendered.
pub const FALLBACK_PLAN: &str = "Generate diverse writing prompts";

/// Number of recent topics mentioned in a plan.
pub const RECENT_TOPICS_IN_PLAN: usize = 3;

pub const DEFAULT_PLAN_TEMPLATE: &str = indoc! {
    "Generate writing prompts by:
    1. Combining {niche} niche with {tone} tone
    2. Avoiding recent topics: {recent_topics}
    3. Considering these constraints: {constraints}
    4. Targeting {audience} audience if specified"
};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),
    #[error("unclosed placeholder starting at byte {0}")]
    Unclosed(usize),
    #[error("single '}}' encountered at byte {0}")]
    UnmatchedBrace(usize),
}

/// Text with `{name}` placeholders. `{{` and `}}` are literal braces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanTemplate {
    source: String,
}

impl Default for PlanTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_PLAN_TEMPLATE)
    }
}

impl PlanTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }

    /// Substitute every placeholder using `lookup`.
    pub fn render<'a, F>(&self, lookup: F) -> Result<String, PlanError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let src = self.source.as_str();
        let mut out = String::with_capacity(src.len());
        let mut rest = src.char_indices().peekable();
        while let Some((i, c)) = rest.next() {
            match c {
                '{' if matches!(rest.peek(), Some((_, '{'))) => {
                    rest.next();
                    out.push('{');
                }
                '{' => {
                    let close = src[i + 1..]
                        .find('}')
                        .map(|end| i + 1 + end)
                        .ok_or(PlanError::Unclosed(i))?;
                    let name = &src[i + 1..close];
                    let value = lookup(name)
                        .ok_or_else(|| PlanError::UnknownPlaceholder(name.to_string()))?;
                    out.push_str(value);
                    while rest.next_if(|(j, _)| *j <= close).is_some() {}
                }
                '}' if matches!(rest.peek(), Some((_, '}'))) => {
                    rest.next();
                    out.push('}');
                }
                '}' => return Err(PlanError::UnmatchedBrace(i)),
                other => out.push(other),
            }
        }
        Ok(out)
    }
}

/// Collects the values a plan is rendered from.
#[derive(Clone, Debug, Default)]
pub struct PlanBuilder {
    pub niche: Option<String>,
    pub tone: Option<String>,
    pub recent_topics: Vec<String>,
    pub constraints: Vec<String>,
    pub audience: Option<String>,
}

impl PlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn niche(mut self, niche: Option<impl Into<String>>) -> Self {
        self.niche = niche.map(Into::into);
        self
    }

    pub fn tone(mut self, tone: Option<impl Into<String>>) -> Self {
        self.tone = tone.map(Into::into);
        self
    }

    pub fn push_recent_topic(mut self, topic: impl Into<String>) -> Self {
        self.recent_topics.push(topic.into());
        self
    }

    pub fn constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = constraints.into_iter().map(Into::into).collect();
        self
    }

    pub fn audience(mut self, audience: Option<impl Into<String>>) -> Self {
        self.audience = audience.map(Into::into);
        self
    }

    pub fn build(&self, template: &PlanTemplate) -> Result<String, PlanError> {
        let topics = list_or_none(self.recent_topics.iter().take(RECENT_TOPICS_IN_PLAN));
        let constraints = list_or_none(self.constraints.iter());
        template.render(|name| match name {
            "niche" => Some(self.niche.as_deref().unwrap_or("general")),
            "tone" => Some(self.tone.as_deref().unwrap_or("neutral")),
            "recent_topics" => Some(topics.as_str()),
            "constraints" => Some(constraints.as_str()),
            "audience" => Some(self.audience.as_deref().unwrap_or("general")),
            _ => None,
        })
    }
}

fn list_or_none<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let joined = items.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".into()
    } else {
        joined
    }
}
