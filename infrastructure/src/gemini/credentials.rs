//! Where the API key comes from

use super::error::{GeminiError, Result};

/// Default environment variable holding the Gemini API key
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Source of the API key, consulted on every request
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    /// Read the named environment variable at call time
    Env(String),
    /// A key supplied directly (`None` behaves like an unset variable)
    Static(Option<String>),
}

impl ApiKeySource {
    /// Resolve the key; unset and blank values both count as missing
    pub fn resolve(&self) -> Result<String> {
        let value = match self {
            ApiKeySource::Env(var) => std::env::var(var).ok(),
            ApiKeySource::Static(key) => key.clone(),
        };

        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey(self.label().to_string()))
    }

    /// Name shown to the user when the key is missing
    pub fn label(&self) -> &str {
        match self {
            ApiKeySource::Env(var) => var,
            ApiKeySource::Static(_) => DEFAULT_API_KEY_ENV,
        }
    }
}

impl Default for ApiKeySource {
    fn default() -> Self {
        ApiKeySource::Env(DEFAULT_API_KEY_ENV.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_key_resolves_trimmed() {
        let source = ApiKeySource::Static(Some("  secret \n".to_string()));
        assert_eq!(source.resolve().unwrap(), "secret");
    }

    #[test]
    fn test_blank_static_key_is_missing() {
        let source = ApiKeySource::Static(Some("   ".to_string()));
        assert!(matches!(
            source.resolve(),
            Err(GeminiError::MissingApiKey(var)) if var == "API_KEY"
        ));
    }

    #[test]
    fn test_unset_env_var_is_missing() {
        let source = ApiKeySource::Env("SOMDET_TEST_SURELY_UNSET_KEY".to_string());
        assert!(matches!(
            source.resolve(),
            Err(GeminiError::MissingApiKey(var)) if var == "SOMDET_TEST_SURELY_UNSET_KEY"
        ));
    }

    #[test]
    fn test_env_var_read_at_call_time() {
        figment::Jail::expect_with(|jail| {
            let source = ApiKeySource::Env("SOMDET_TEST_JAIL_KEY".to_string());
            assert!(source.resolve().is_err());

            jail.set_env("SOMDET_TEST_JAIL_KEY", "abc123");
            assert_eq!(source.resolve().unwrap(), "abc123");
            Ok(())
        });
    }
}
