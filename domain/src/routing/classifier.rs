//! Keyword heuristic for question classification
//!
//! A question is [`QuestionCategory::Technical`] when it mentions a term from
//! the engineering vocabulary or carries a code-like marker; every other
//! question is [`QuestionCategory::General`]. The function is total and
//! deterministic, which makes routing testable without a model call.

use super::category::QuestionCategory;

/// Programming, algorithm and tooling vocabulary.
///
/// Words that are common outside engineering ("string", "tree", "memory",
/// single-letter "c") are left out on purpose.
const TECHNICAL_TERMS: &[&str] = &[
    // languages
    "rust", "python", "java", "javascript", "typescript", "golang", "c++", "c#", "ruby",
    "php", "kotlin", "swift", "scala", "haskell", "sql", "html", "css", "bash",
    // data structures and algorithms
    "algorithm", "array", "hash", "hashmap", "hashtable", "heap", "linked", "pointer",
    "recursion", "recursive", "sorting", "bfs", "dfs", "vector", "struct", "enum",
    "trait", "closure", "iterator", "complexity",
    // engineering practice and tooling
    "api", "async", "backend", "frontend", "bug", "cache", "class", "code", "coding",
    "compile", "compiler", "interpreter", "bytecode", "concurrency", "database",
    "debug", "debugging", "deploy", "docker", "kubernetes", "framework", "function",
    "git", "github", "library", "linux", "unix", "mutex", "thread", "runtime", "regex",
    "refactor", "repository", "script", "server", "software", "syntax", "variable",
    "exception", "segfault", "endpoint", "microservice", "http", "https", "json", "tcp",
    "udp", "cpu", "gpu", "query", "parser", "program", "programming", "lambda", "null",
];

/// Substrings that only show up in code-ish questions.
const CODE_MARKERS: &[&str] = &["```", "()", "::", "=>", "->", "{}", "!="];

/// Keyword-based question classifier
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    extra_terms: Vec<String>,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add project-specific terms on top of the built-in vocabulary
    pub fn with_extra_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_terms
            .extend(terms.into_iter().map(|t| t.into().to_lowercase()));
        self
    }

    /// Classify a question. Never fails.
    pub fn classify(&self, text: &str) -> QuestionCategory {
        if self.matched_term(text).is_some() {
            QuestionCategory::Technical
        } else {
            QuestionCategory::General
        }
    }

    /// The first vocabulary term or code marker found in `text`, if any
    pub fn matched_term(&self, text: &str) -> Option<String> {
        if let Some(marker) = CODE_MARKERS.iter().find(|m| text.contains(**m)) {
            return Some((*marker).to_string());
        }

        let lower = text.to_lowercase();
        tokenize(&lower).find_map(|token| {
            if self.is_term(token) {
                return Some(token.to_string());
            }
            // naive plural: "algorithms", "databases", "classes"
            let singular = token
                .strip_suffix("es")
                .filter(|stem| self.is_term(stem))
                .or_else(|| token.strip_suffix('s').filter(|stem| self.is_term(stem)))?;
            Some(singular.to_string())
        })
    }

    fn is_term(&self, token: &str) -> bool {
        TECHNICAL_TERMS.contains(&token) || self.extra_terms.iter().any(|t| t == token)
    }
}

/// Split on anything that cannot be part of a term; `+` and `#` are kept so
/// `c++` and `c#` survive.
fn tokenize(lower: &str) -> impl Iterator<Item = &str> {
    lower
        .split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
}
