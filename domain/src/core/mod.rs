//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: hosted models the agents can be wired to
//! - [`question::Question`]: a validated question to route
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod question;
