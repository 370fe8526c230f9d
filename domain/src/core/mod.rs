//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — the remote model that answers questions
//! - [`message::UserMessage`] — validated user input
//! - [`sampling::SamplingParams`] — fixed generation parameters
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod message;
pub mod model;
pub mod sampling;
