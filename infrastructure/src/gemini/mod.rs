//! Gemini adapter
//!
//! Implements the [`ReplyFetcher`](somdet_application::ReplyFetcher) port on
//! top of the Gemini `generateContent` REST endpoint.

pub mod credentials;
pub mod error;
pub mod fetcher;
pub mod protocol;

pub use credentials::{ApiKeySource, DEFAULT_API_KEY_ENV};
pub use error::GeminiError;
pub use fetcher::{DEFAULT_ENDPOINT, GeminiReplyFetcher, GeminiSettings, translate_error};
