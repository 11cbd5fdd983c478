use crate::client::OpenAIClient;
use crate::traits::LLMError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Connection settings for an OpenAI-compatible service.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            timeout: None,
        }
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// `OPENAI_API_KEY` is required. `OPENAI_BASE_URL`, `OPENAI_MODEL` and
    /// `OPENAI_TIMEOUT_SECS` are optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LLMError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LLMError::MissingCredential("OPENAI_API_KEY".into()))?;
        let mut config = Self::new(api_key);
        if let Some(url) = lookup("OPENAI_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(model) = lookup("OPENAI_MODEL").filter(|m| !m.trim().is_empty()) {
            config.model = model;
        }
        if let Some(secs) = lookup("OPENAI_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| LLMError::Config(format!("OPENAI_TIMEOUT_SECS is not a number: {secs}")))?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

/// Create an [`OpenAIClient`] from the environment.
///
/// `adjust` may override the loaded settings before the client is built.
/// The final settings are returned alongside the client.
pub fn client_from_env<F>(adjust: F) -> Result<(OpenAIClient, ClientConfig), LLMError>
where
    F: FnOnce(&mut ClientConfig),
{
    client_from_lookup(|key| std::env::var(key).ok(), adjust)
}

/// [`client_from_env`] reading variables through `lookup`.
pub fn client_from_lookup<L, F>(lookup: L, adjust: F) -> Result<(OpenAIClient, ClientConfig), LLMError>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce(&mut ClientConfig),
{
    let mut config = ClientConfig::from_lookup(lookup)?;
    adjust(&mut config);
    let client = OpenAIClient::from_config(&config)?;
    Ok((client, config))
}
