//! Application-level configuration.
//!
//! Configuration types that control how use cases behave:
//!
//! - [`ClientParams`]: model, token budget and retry policy for the LLM client
//! - [`RetryPolicy`]: attempt count and exponential backoff schedule
//! - [`RoutingStrategy`]: keyword heuristic or classification call

pub mod client_params;
pub mod retry_policy;
pub mod routing_strategy;

pub use client_params::ClientParams;
pub use retry_policy::RetryPolicy;
pub use routing_strategy::RoutingStrategy;
