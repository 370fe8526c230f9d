//! Model value object representing the remote Gemini model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Gemini model used to answer questions (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Model {
    #[default]
    Gemini3FlashPreview,
    Gemini3ProPreview,
    /// Any other model id accepted by the `generateContent` endpoint
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini3FlashPreview => "gemini-3-flash-preview",
            Model::Gemini3ProPreview => "gemini-3-pro-preview",
            Model::Custom(s) => s,
        }
    }

    /// A custom model id that is blank cannot be sent to the API
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s {
            "gemini-3-flash-preview" => Model::Gemini3FlashPreview,
            "gemini-3-pro-preview" => Model::Gemini3ProPreview,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
