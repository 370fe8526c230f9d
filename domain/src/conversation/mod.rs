//! Conversation domain.
//!
//! - [`turn::Turn`] — one message, tagged with its [`turn::Role`]
//! - [`entities::Conversation`] — the append-only turn list shown to the user

pub mod entities;
pub mod turn;
