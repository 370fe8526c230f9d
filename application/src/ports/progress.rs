//! Progress notification port
//!
//! Lets the presentation layer show that a reply is outstanding.

/// Callbacks around one outstanding reply
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait ReplyProgressNotifier: Send + Sync {
    /// Called after the user turn is recorded, right before the remote call
    fn on_request_start(&self);

    /// Called once the call settled, before the model turn is recorded
    fn on_reply_settled(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ReplyProgressNotifier for NoProgress {
    fn on_request_start(&self) {}
    fn on_reply_settled(&self, _success: bool) {}
}
