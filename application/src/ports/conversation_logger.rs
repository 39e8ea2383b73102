//! Port for the structured question/answer transcript.
//!
//! Separate from `tracing`: tracing carries human-readable diagnostics,
//! while this port records each routed question and its outcome in a
//! machine-readable form (one JSON record per event).

use serde_json::Value;

/// A structured transcript event.
pub struct ConversationEvent {
    /// Event type identifier ("question_routed", "answer", "answer_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording transcript events.
///
/// `log` is synchronous and infallible; write failures are dropped so the
/// transcript never interrupts answering.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when no transcript is requested.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
