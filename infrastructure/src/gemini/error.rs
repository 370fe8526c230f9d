//! Error types for the Gemini adapter

use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key is not set in environment variable {0}")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {error}")]
    ParseError { error: String },
}

impl GeminiError {
    /// Check if the API rejected the credential itself
    pub fn is_invalid_api_key(&self) -> bool {
        match self {
            GeminiError::Api { message, .. } => {
                message.to_lowercase().contains("api key not valid")
            }
            _ => false,
        }
    }
}
