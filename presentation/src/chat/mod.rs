//! Interactive question loop
//!
//! Reads one question per line from any `BufRead` and prints answers until
//! `q`, `quit` or end of input.

mod repl;

pub use repl::{AskError, LoopSummary, QuestionLoop, is_quit_command};
