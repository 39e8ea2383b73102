//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is routed
//! and answered.

use std::time::Duration;
use switchboard_domain::QuestionCategory;

/// Callback for progress updates during routing
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called before the router inspects the question
    fn on_classify_start(&self) {}

    /// Called once the router has picked an agent
    fn on_classified(&self, category: QuestionCategory);

    /// Called when an agent starts its model call
    fn on_agent_start(&self, category: QuestionCategory);

    /// Called when an agent finishes, successfully or not
    fn on_agent_complete(&self, category: QuestionCategory, success: bool);

    /// Called before sleeping between attempts after an overload error
    fn on_retry(&self, _attempt: u32, _max_attempts: u32, _delay: Duration) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_classified(&self, _category: QuestionCategory) {}
    fn on_agent_start(&self, _category: QuestionCategory) {}
    fn on_agent_complete(&self, _category: QuestionCategory, _success: bool) {}
}
