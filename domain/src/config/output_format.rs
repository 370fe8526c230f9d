//! Output format value object

use serde::{Deserialize, Serialize};

/// How one-shot replies are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Styled reply text (default)
    #[default]
    Text,
    /// The conversation transcript as JSON
    Json,
}
