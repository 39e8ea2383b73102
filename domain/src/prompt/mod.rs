//! Prompt domain
//!
//! Templates for the classification call and the two answering agents.

mod template;

pub use template::PromptTemplate;
