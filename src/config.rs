//! Settings for ts-assistant
//!
//! Stored in ~/.config/ts-assistant/config.json. The file only tunes the
//! request (model, limits, endpoint) and the demo delay; the credential is
//! never read from or written to disk.

use crate::llm::{self, LlmConfig, Model};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub model: Model,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Completions URL override (OpenAI-compatible gateways)
    pub endpoint: Option<String>,
    /// Simulated latency for demo mode, in milliseconds
    pub mock_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: llm::models::DEFAULT_MAX_TOKENS,
            temperature: llm::models::DEFAULT_TEMPERATURE,
            endpoint: None,
            mock_delay_ms: llm::MOCK_DELAY.as_millis() as u64,
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ts-assistant"))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Load settings from the default location, or return defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`.
    ///
    /// A missing file yields defaults. A corrupt file is moved aside to
    /// `config.json.corrupt` and defaults are used. Out-of-range values are
    /// replaced field by field.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        let settings: Settings = match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                preserve_corrupt_config(path, &content);
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "settings file was corrupted; a backup was saved and defaults were loaded"
                );
                return Self::default();
            }
        };

        settings.sanitized()
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), String> {
        if self.max_tokens == 0 {
            return Err("maxTokens must be greater than zero".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "temperature {} is outside the range 0.0..=2.0",
                self.temperature
            ));
        }
        if let Some(endpoint) = &self.endpoint {
            let parsed = url::Url::parse(endpoint)
                .map_err(|e| format!("endpoint '{}' is not a valid URL: {}", endpoint, e))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!("endpoint '{}' must use http or https", endpoint));
            }
        }
        Ok(())
    }

    /// Replace invalid fields with their defaults, logging each one
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.max_tokens == 0 {
            tracing::warn!("maxTokens of 0 ignored, using {}", defaults.max_tokens);
            self.max_tokens = defaults.max_tokens;
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            tracing::warn!(
                "temperature {} ignored, using {}",
                self.temperature,
                defaults.temperature
            );
            self.temperature = defaults.temperature;
        }
        if self.endpoint.is_some() {
            let endpoint_only = Settings {
                endpoint: self.endpoint.clone(),
                ..Self::default()
            };
            if let Err(e) = endpoint_only.validate() {
                tracing::warn!("{}; using the default endpoint", e);
                self.endpoint = None;
            }
        }

        self
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }

    /// Build the request configuration for a live call
    pub fn llm_config(&self, api_key: &str) -> LlmConfig {
        let mut config = LlmConfig::new(api_key)
            .with_model(self.model)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        config
    }

    /// Get the config file location for display
    pub fn config_location() -> String {
        Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "~/.config/ts-assistant/config.json".to_string())
    }
}

fn preserve_corrupt_config(path: &Path, content: &str) {
    let corrupt_path = path.with_extension("json.corrupt");
    if fs::rename(path, &corrupt_path).is_err() {
        let _ = fs::write(&corrupt_path, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.model, Model::Gpt4);
        assert_eq!(settings.max_tokens, 1500);
        assert_eq!(settings.mock_delay(), llm::MOCK_DELAY);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"model": "gpt-4-turbo", "mockDelayMs": 10}"#).unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.model, Model::Gpt4Turbo);
        assert_eq!(settings.mock_delay_ms, 10);
        assert_eq!(settings.max_tokens, 1500);
    }

    #[test]
    fn test_corrupt_file_is_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        assert!(!path.exists());
        let backup = fs::read_to_string(dir.path().join("config.json.corrupt")).unwrap();
        assert_eq!(backup, "{ not json");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"maxTokens": 0, "temperature": 7.5, "endpoint": "not a url"}"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        assert_eq!(settings.max_tokens, 1500);
        assert_eq!(settings.temperature, 0.1);
        assert!(settings.endpoint.is_none());
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let settings = Settings {
            endpoint: Some("ftp://example.com/v1".to_string()),
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("http"));
    }

    #[test]
    fn test_llm_config_carries_settings() {
        let settings = Settings {
            model: Model::Gpt35Turbo,
            max_tokens: 800,
            temperature: 0.4,
            endpoint: Some("http://localhost:8080/v1/chat/completions".to_string()),
            mock_delay_ms: 0,
        };
        let config = settings.llm_config("sk-abc");
        assert_eq!(config.api_key, "sk-abc");
        assert_eq!(config.model(), Model::Gpt35Turbo);
        assert_eq!(config.max_tokens(), 800);
        assert_eq!(config.temperature(), 0.4);
        assert_eq!(config.endpoint(), "http://localhost:8080/v1/chat/completions");
    }
}
