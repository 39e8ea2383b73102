//! Prompt templates for classification and the two answering agents

use crate::routing::QuestionCategory;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the classification call
    pub fn classifier_system() -> &'static str {
        r#"You are an agent that decides whether a question is a technical code question or a general one.
Only answer with "code" if the question is about technical development (programming, software, algorithms, tooling).
Otherwise answer "general".
Reply with exactly one word: code or general."#
    }

    /// User prompt for the classification call
    pub fn classifier_query(question: &str) -> String {
        format!(
            r#"Question: {}

Your answer (code/general):"#,
            question
        )
    }

    /// System prompt for the technical agent
    pub fn technical_system() -> &'static str {
        r#"You are a software engineer. Answer the question with step-by-step details.
Be precise, mention concrete techniques, data structures or commands where they help."#
    }

    /// System prompt for the general-knowledge agent
    pub fn general_system() -> &'static str {
        r#"You are a knowledgeable assistant. Give a clear and concise answer to the question.
Support the answer with a few relevant details or explanations."#
    }

    /// System prompt for the agent serving `category`
    pub fn agent_system(category: QuestionCategory) -> &'static str {
        match category {
            QuestionCategory::Technical => Self::technical_system(),
            QuestionCategory::General => Self::general_system(),
        }
    }

    /// User prompt for an answering agent, including the required layout
    pub fn answer_query(category: QuestionCategory, question: &str) -> String {
        let (overview, detail) = match category {
            QuestionCategory::Technical => ("Your brief overview", "Step"),
            QuestionCategory::General => ("Your direct answer", "Supporting detail"),
        };
        format!(
            r#"Question: {question}

Please format your response as follows:
MAIN_ANSWER: [{overview}]
SUPPORTING_DETAILS:
- [{detail} 1]
- [{detail} 2]
[Add more as needed]

Your response:"#
        )
    }
}
