//! Application layer for somdet-chat
//!
//! This crate contains the conversation controller use case and the ports
//! it talks through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{NoProgress, ReplyProgressNotifier},
    reply_fetcher::{FetchError, ReplyFetcher},
};
pub use use_cases::converse::{ConversationController, SubmitOutcome, SubmitRejection};
