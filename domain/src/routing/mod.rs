//! Routing domain
//!
//! Which agent answers a question, and the keyword heuristic that decides
//! it without a model call.

pub mod category;
pub mod classifier;

pub use category::QuestionCategory;
pub use classifier::KeywordClassifier;
