//! Use cases for the application layer

pub mod answer_question;
pub mod classify_question;
pub mod route_question;
