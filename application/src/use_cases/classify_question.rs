//! Question routers.
//!
//! A [`QuestionRouter`] picks which agent answers a question. Two
//! implementations exist:
//!
//! - [`KeywordRouter`]: deterministic vocabulary heuristic, no model call
//! - [`LlmRouter`]: asks the model for "code" or "general", falling back to
//!   the heuristic when the reply names neither

use crate::client::{LlmClient, LlmClientError};
use async_trait::async_trait;
use switchboard_domain::util::truncate_str;
use switchboard_domain::{KeywordClassifier, PromptTemplate, Question, QuestionCategory};
use tracing::{debug, warn};

/// Decides which agent handles a question
#[async_trait]
pub trait QuestionRouter: Send + Sync {
    async fn route(&self, question: &Question) -> Result<QuestionCategory, LlmClientError>;
}

/// Routes with the keyword heuristic alone
#[derive(Debug, Clone, Default)]
pub struct KeywordRouter {
    classifier: KeywordClassifier,
}

impl KeywordRouter {
    pub fn new(classifier: KeywordClassifier) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl QuestionRouter for KeywordRouter {
    async fn route(&self, question: &Question) -> Result<QuestionCategory, LlmClientError> {
        let category = match self.classifier.matched_term(question.content()) {
            Some(term) => {
                debug!("Keyword router matched '{}'", term);
                QuestionCategory::Technical
            }
            None => QuestionCategory::General,
        };
        Ok(category)
    }
}

/// Routes with a classification call to the model
pub struct LlmRouter {
    client: LlmClient,
    fallback: KeywordClassifier,
}

impl LlmRouter {
    pub fn new(client: LlmClient) -> Self {
        Self {
            client,
            fallback: KeywordClassifier::new(),
        }
    }

    /// Heuristic used when the model's decision is unrecognised
    pub fn with_fallback(mut self, fallback: KeywordClassifier) -> Self {
        self.fallback = fallback;
        self
    }
}

#[async_trait]
impl QuestionRouter for LlmRouter {
    async fn route(&self, question: &Question) -> Result<QuestionCategory, LlmClientError> {
        let response = self
            .client
            .complete(
                PromptTemplate::classifier_system(),
                &PromptTemplate::classifier_query(question.content()),
            )
            .await?;

        match QuestionCategory::from_decision(&response.text) {
            Some(category) => {
                debug!("Model routed question as {}", category);
                Ok(category)
            }
            None => {
                let category = self.fallback.classify(question.content());
                warn!(
                    "Unrecognised routing decision '{}', keyword fallback chose {}",
                    truncate_str(response.text.trim(), 40),
                    category
                );
                Ok(category)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientParams;
    use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use switchboard_domain::LlmResponse;

    struct MockGateway {
        replies: Mutex<VecDeque<Result<LlmResponse, GatewayError>>>,
    }

    impl MockGateway {
        fn replying(replies: Vec<Result<LlmResponse, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
            })
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn complete(&self, _: &CompletionRequest) -> Result<LlmResponse, GatewayError> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("no reply".into())))
        }
    }

    fn question(text: &str) -> Question {
        Question::try_new(text).unwrap()
    }

    fn llm_router(reply: &str) -> LlmRouter {
        let gateway = MockGateway::replying(vec![Ok(LlmResponse::from_text(reply))]);
        LlmRouter::new(LlmClient::new(gateway, ClientParams::default()))
    }

    #[tokio::test]
    async fn test_keyword_router() {
        let router = KeywordRouter::default();
        assert_eq!(
            router
                .route(&question("How does a hash table resolve collisions?"))
                .await
                .unwrap(),
            QuestionCategory::Technical
        );
        assert_eq!(
            router
                .route(&question("What are the benefits of meditation?"))
                .await
                .unwrap(),
            QuestionCategory::General
        );
    }

    #[tokio::test]
    async fn test_llm_router_follows_decision() {
        let q = question("What are the benefits of meditation?");
        assert_eq!(
            llm_router("code").route(&q).await.unwrap(),
            QuestionCategory::Technical
        );
        assert_eq!(
            llm_router(" General.\n").route(&q).await.unwrap(),
            QuestionCategory::General
        );
    }

    #[tokio::test]
    async fn test_llm_router_falls_back_on_unclear_reply() {
        let router = llm_router("I am not sure about that one");
        assert_eq!(
            router
                .route(&question("How do I reverse a linked list?"))
                .await
                .unwrap(),
            QuestionCategory::Technical
        );
    }

    #[tokio::test]
    async fn test_llm_router_propagates_errors() {
        let gateway = MockGateway::replying(vec![Err(GatewayError::Authentication(
            "bad key".into(),
        ))]);
        let router = LlmRouter::new(LlmClient::new(gateway, ClientParams::default()));

        let err = router.route(&question("anything")).await.unwrap_err();
        assert!(err.is_authentication());
    }
}
