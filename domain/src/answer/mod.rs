//! Answer domain
//!
//! - [`entities::Answer`]: the structured record printed for each question
//! - [`parsing::parse_answer`]: turns model text into [`entities::AnswerContent`]

pub mod entities;
pub mod parsing;

pub use entities::{Answer, AnswerContent, AnswerMetadata};
pub use parsing::parse_answer;
