//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::gemini::{ApiKeySource, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, GeminiSettings};
use serde::{Deserialize, Serialize};
use somdet_domain::{Model, OutputFormat};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("endpoint must start with http:// or https://, got {0:?}")]
    InvalidEndpoint(String),
}

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model id passed to `models/{model}:generateContent`
    pub model: Model,
    /// API base URL
    pub endpoint: String,
    /// Environment variable the API key is read from on every request
    pub api_key_env: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl FileGeminiConfig {
    pub fn to_settings(&self) -> GeminiSettings {
        GeminiSettings {
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            api_key: ApiKeySource::Env(self.api_key_env.clone()),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format of one-shot replies (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner while a reply is outstanding
    pub show_progress: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini connection settings
    pub gemini: FileGeminiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gemini.model.is_blank() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.gemini.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyEnv);
        }

        let endpoint = &self.gemini.endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidEndpoint(endpoint.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
model = "gemini-3-pro-preview"
endpoint = "http://localhost:8080/v1beta"
api_key_env = "GEMINI_API_KEY"

[output]
format = "json"
color = false

[repl]
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, Model::Gemini3ProPreview);
        assert_eq!(config.gemini.endpoint, "http://localhost:8080/v1beta");
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-flash"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.gemini.model,
            Model::Custom("gemini-2.5-flash".to_string())
        );
        // Defaults should apply
        assert_eq!(config.gemini.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.gemini.api_key_env, "API_KEY");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.gemini.model, Model::default());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_model_name() {
        let toml_str = r#"
[gemini]
model = " "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName)
        ));
    }

    #[test]
    fn test_validate_empty_api_key_env() {
        let toml_str = r#"
[gemini]
api_key_env = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyApiKeyEnv)
        ));
    }

    #[test]
    fn test_validate_endpoint_scheme() {
        let toml_str = r#"
[gemini]
endpoint = "generativelanguage.googleapis.com"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_to_settings_reads_key_from_env() {
        let settings = FileGeminiConfig::default().to_settings();
        assert_eq!(settings.model, Model::default());
        assert!(matches!(settings.api_key, ApiKeySource::Env(ref var) if var == "API_KEY"));
    }
}
