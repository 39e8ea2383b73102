//! LLM session domain.
//!
//! - [`response::LlmResponse`]: one completion with its envelope fields
//! - [`response::TokenUsage`]: token accounting reported by the provider

pub mod response;
