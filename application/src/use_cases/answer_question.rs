//! Answering agents.
//!
//! An [`AnswerAgent`] sends the question under its category's system prompt,
//! parses the reply into [`AnswerContent`] and wraps it with metadata taken
//! from the provider response.

use crate::client::{LlmClient, LlmClientError};
use switchboard_domain::{
    Answer, AnswerContent, AnswerMetadata, LlmResponse, PromptTemplate, Question,
    QuestionCategory, parse_answer,
};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Errors that can occur while an agent answers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error(transparent)]
    Client(#[from] LlmClientError),

    /// The model replied with no visible text
    #[error("Model returned an empty answer")]
    EmptyResponse,
}

impl AgentError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, AgentError::Client(e) if e.is_authentication())
    }
}

/// Agent that answers one category of question
#[derive(Clone)]
pub struct AnswerAgent {
    category: QuestionCategory,
    client: LlmClient,
}

impl AnswerAgent {
    pub fn new(category: QuestionCategory, client: LlmClient) -> Self {
        Self { category, client }
    }

    /// Step-by-step software engineering agent
    pub fn technical(client: LlmClient) -> Self {
        Self::new(QuestionCategory::Technical, client)
    }

    /// Concise general-knowledge agent
    pub fn general(client: LlmClient) -> Self {
        Self::new(QuestionCategory::General, client)
    }

    /// Answer `question`. Each call gets a fresh run id.
    pub async fn answer(&self, question: &Question) -> Result<Answer, AgentError> {
        let run_id = Uuid::new_v4().to_string();
        info!("{} agent run {} started", self.category, run_id);

        let response = self
            .client
            .complete(
                PromptTemplate::agent_system(self.category),
                &PromptTemplate::answer_query(self.category, question.content()),
            )
            .await?;

        let content = parse_answer(&response.text).ok_or(AgentError::EmptyResponse)?;
        debug!(
            "Run {} parsed {} supporting detail(s)",
            run_id,
            content.supporting_details.len()
        );

        Ok(self.build_answer(content, response, run_id))
    }

    fn build_answer(&self, content: AnswerContent, response: LlmResponse, run_id: String) -> Answer {
        Answer {
            content,
            metadata: AnswerMetadata {
                response_id: response.id,
                model: self.client.model().to_string(),
                run_id,
                stop_reason: response
                    .stop_reason
                    .map(|r| r.to_string())
                    .unwrap_or_default(),
                token_usage: response.usage,
            },
        }
    }
}
