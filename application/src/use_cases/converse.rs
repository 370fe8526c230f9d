//! Converse use case.
//!
//! Owns the [`Conversation`] and the "awaiting reply" flag, and drives the
//! request/response turn-taking with a [`ReplyFetcher`]:
//!
//! 1. Validate the input and check that no reply is outstanding
//! 2. Append the user turn and set the flag
//! 3. Fetch the reply
//! 4. Append exactly one model turn and clear the flag

use crate::ports::progress::{NoProgress, ReplyProgressNotifier};
use crate::ports::reply_fetcher::ReplyFetcher;
use somdet_domain::{Conversation, PersonaTemplate, Turn, UserMessage};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Why a submission was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// The text was empty or whitespace only
    EmptyInput,
    /// Another reply is still outstanding
    AwaitingReply,
}

/// Result of [`ConversationController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The model turn that was appended (reply or failure message)
    Replied(Turn),
    /// Nothing was appended and the flag was left untouched
    Rejected(SubmitRejection),
}

impl SubmitOutcome {
    /// The appended model turn, if any
    pub fn reply(&self) -> Option<&Turn> {
        match self {
            SubmitOutcome::Replied(turn) => Some(turn),
            SubmitOutcome::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Default)]
struct ChatState {
    conversation: Conversation,
    awaiting_reply: bool,
}

/// Clears the awaiting flag when dropped, so the flag cannot stay set even if
/// the submitting future is dropped before the fetch settles.
struct AwaitingReplyGuard<'a> {
    state: &'a Mutex<ChatState>,
}

impl AwaitingReplyGuard<'_> {
    /// Record the model turn and clear the flag under one lock
    fn settle(self, reply: Turn) {
        let mut state = lock(self.state);
        state.conversation.push(reply);
        state.awaiting_reply = false;
    }
}

impl Drop for AwaitingReplyGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).awaiting_reply = false;
    }
}

fn lock(state: &Mutex<ChatState>) -> MutexGuard<'_, ChatState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Conversation controller
///
/// The lock around the state is never held across the remote call; the
/// awaiting flag alone keeps a second submission out while one is in flight.
pub struct ConversationController {
    fetcher: Arc<dyn ReplyFetcher>,
    state: Mutex<ChatState>,
}

impl ConversationController {
    pub fn new(fetcher: Arc<dyn ReplyFetcher>) -> Self {
        Self {
            fetcher,
            state: Mutex::new(ChatState::default()),
        }
    }

    /// Submit user text without progress reporting
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        self.submit_with_progress(text, &NoProgress).await
    }

    /// Submit user text, reporting the outstanding reply to `progress`
    pub async fn submit_with_progress(
        &self,
        text: &str,
        progress: &dyn ReplyProgressNotifier,
    ) -> SubmitOutcome {
        let message = match UserMessage::try_new(text) {
            Ok(message) => message,
            Err(e) => {
                debug!("Ignoring submission: {}", e);
                return SubmitOutcome::Rejected(SubmitRejection::EmptyInput);
            }
        };

        let guard = {
            let mut state = lock(&self.state);
            if state.awaiting_reply {
                debug!("Ignoring submission while a reply is outstanding");
                return SubmitOutcome::Rejected(SubmitRejection::AwaitingReply);
            }
            state.conversation.push(Turn::user(message.content()));
            state.awaiting_reply = true;
            AwaitingReplyGuard { state: &self.state }
        };

        info!("Fetching reply ({} chars)", message.content().chars().count());
        progress.on_request_start();

        let (reply, success) = match self.fetcher.fetch(message.content()).await {
            Ok(text) => (Turn::model(text), true),
            Err(e) => {
                warn!(
                    "Failed to get reply (recoverable: {}): {}",
                    e.is_recoverable(),
                    e
                );
                (
                    Turn::model(PersonaTemplate::fetch_failure_reply(&e.to_string())),
                    false,
                )
            }
        };

        progress.on_reply_settled(success);
        guard.settle(reply.clone());

        SubmitOutcome::Replied(reply)
    }

    /// Snapshot of the conversation in display order
    pub fn turns(&self) -> Vec<Turn> {
        lock(&self.state).conversation.turns().to_vec()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        lock(&self.state).awaiting_reply
    }

    pub fn len(&self) -> usize {
        lock(&self.state).conversation.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.state).conversation.is_empty()
    }
}
