//! Application layer for switchboard
//!
//! This crate contains use cases, port definitions, the retrying LLM client
//! and application configuration. It depends only on the domain layer.

pub mod client;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use client::{LlmClient, LlmClientError};
pub use config::{ClientParams, RetryPolicy, RoutingStrategy};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::answer_question::{AgentError, AnswerAgent};
pub use use_cases::classify_question::{KeywordRouter, LlmRouter, QuestionRouter};
pub use use_cases::route_question::{RouteQuestionError, RouteQuestionUseCase, RoutedAnswer};
