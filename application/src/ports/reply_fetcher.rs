//! Reply Fetcher port
//!
//! Defines how the application layer asks the remote model for one reply.

use async_trait::async_trait;
use thiserror::Error;

/// Errors a reply fetch can settle with
///
/// Both variants carry a message that is already fit to show to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No credential is configured; retrying within the session will not help
    #[error("{0}")]
    Configuration(String),

    /// The remote call failed; the user may resubmit
    #[error("{0}")]
    Upstream(String),
}

impl FetchError {
    /// Check if a manual retry could succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FetchError::Upstream(_))
    }
}

/// Fetches one reply for one user utterance
///
/// Implementations send the persona instruction together with the text and
/// return the reply, or the fixed fallback when the model answered with
/// nothing usable. One request, one response: no retry, no streaming.
#[async_trait]
pub trait ReplyFetcher: Send + Sync {
    async fn fetch(&self, user_text: &str) -> Result<String, FetchError>;
}
