use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default chat completions endpoint
pub const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_MAX_TOKENS: u32 = 1500;
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// Models the assistant can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Model {
    #[default]
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Gpt4, Model::Gpt4Turbo, Model::Gpt35Turbo];

    pub fn id(&self) -> &'static str {
        match self {
            Model::Gpt4 => "gpt-4",
            Model::Gpt4Turbo => "gpt-4-turbo",
            Model::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }

    /// The next model in the picker, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Model::Gpt4 => Model::Gpt4Turbo,
            Model::Gpt4Turbo => Model::Gpt35Turbo,
            Model::Gpt35Turbo => Model::Gpt4,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|m| m.id() == s.trim())
            .ok_or_else(|| {
                format!(
                    "unknown model '{}' (expected one of: gpt-4, gpt-4-turbo, gpt-3.5-turbo)",
                    s
                )
            })
    }
}

/// Per-call configuration for a live analysis.
///
/// Only `api_key` is required; the rest fall back to defaults.
#[derive(Clone, Default, PartialEq)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: Option<Model>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    /// Override for the completions URL (compatible gateways, test stubs)
    pub endpoint: Option<String>,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn model(&self) -> Model {
        self.model.unwrap_or_default()
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(OPENAI_URL)
    }
}

// Never print the credential.
impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Token usage reported by the API
#[derive(Deserialize, Clone, Debug, Default)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_ids_round_trip_through_from_str() {
        for model in Model::ALL {
            assert_eq!(model.id().parse::<Model>().unwrap(), model);
        }
        assert!("gpt-5".parse::<Model>().is_err());
    }

    #[test]
    fn test_model_next_cycles() {
        assert_eq!(Model::Gpt4.next(), Model::Gpt4Turbo);
        assert_eq!(Model::Gpt35Turbo.next(), Model::Gpt4);
    }

    #[test]
    fn test_config_defaults() {
        let config = LlmConfig::new("sk-test");
        assert_eq!(config.model(), Model::Gpt4);
        assert_eq!(config.max_tokens(), DEFAULT_MAX_TOKENS);
        assert_eq!(config.temperature(), DEFAULT_TEMPERATURE);
        assert_eq!(config.endpoint(), OPENAI_URL);
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = LlmConfig::new("sk-secret-value");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret-value"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_model_serde_uses_ids() {
        let json = serde_json::to_string(&Model::Gpt35Turbo).unwrap();
        assert_eq!(json, "\"gpt-3.5-turbo\"");
        let model: Model = serde_json::from_str("\"gpt-4-turbo\"").unwrap();
        assert_eq!(model, Model::Gpt4Turbo);
    }
}
