//! Route Question use case.
//!
//! Classifies a question, hands it to the matching agent and returns the
//! structured answer. This is the single entry point the CLI calls per line
//! of input.

use super::answer_question::{AgentError, AnswerAgent};
use super::classify_question::QuestionRouter;
use crate::client::LlmClientError;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::ProgressNotifier;
use serde::Serialize;
use std::sync::Arc;
use switchboard_domain::util::preview;
use switchboard_domain::{Answer, Question, QuestionCategory};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while routing a question
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteQuestionError {
    #[error("Classification failed: {0}")]
    Classification(LlmClientError),

    #[error("{category} agent failed: {source}")]
    Agent {
        category: QuestionCategory,
        #[source]
        source: AgentError,
    },
}

impl RouteQuestionError {
    /// True when the failure was a rejected credential
    pub fn is_authentication(&self) -> bool {
        match self {
            RouteQuestionError::Classification(e) => e.is_authentication(),
            RouteQuestionError::Agent { source, .. } => source.is_authentication(),
        }
    }
}

/// A structured answer together with the agent that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutedAnswer {
    pub category: QuestionCategory,
    pub answer: Answer,
}

/// Use case for routing one question to an agent
pub struct RouteQuestionUseCase {
    router: Arc<dyn QuestionRouter>,
    technical: AnswerAgent,
    general: AnswerAgent,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RouteQuestionUseCase {
    pub fn new(router: Arc<dyn QuestionRouter>, technical: AnswerAgent, general: AnswerAgent) -> Self {
        Self {
            router,
            technical,
            general,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    fn agent_for(&self, category: QuestionCategory) -> &AnswerAgent {
        match category {
            QuestionCategory::Technical => &self.technical,
            QuestionCategory::General => &self.general,
        }
    }

    /// Route `question` and return the answer of exactly one agent.
    pub async fn execute(
        &self,
        question: &Question,
        progress: &dyn ProgressNotifier,
    ) -> Result<RoutedAnswer, RouteQuestionError> {
        info!("Routing question: {}", preview(question.content(), 100));

        progress.on_classify_start();
        let category = self
            .router
            .route(question)
            .await
            .map_err(RouteQuestionError::Classification)?;
        progress.on_classified(category);

        self.conversation_logger.log(ConversationEvent::new(
            "question_routed",
            serde_json::json!({
                "question": question.content(),
                "category": category.as_str(),
            }),
        ));

        progress.on_agent_start(category);
        let result = self.agent_for(category).answer(question).await;
        progress.on_agent_complete(category, result.is_ok());

        match result {
            Ok(answer) => {
                info!(
                    "{} agent answered (run {}, {} tokens)",
                    category,
                    answer.metadata.run_id,
                    answer.metadata.token_usage.total()
                );
                self.conversation_logger.log(ConversationEvent::new(
                    "answer",
                    serde_json::json!({
                        "category": category.as_str(),
                        "answer": &answer,
                    }),
                ));
                Ok(RoutedAnswer { category, answer })
            }
            Err(source) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "answer_failed",
                    serde_json::json!({
                        "category": category.as_str(),
                        "error": source.to_string(),
                    }),
                ));
                Err(RouteQuestionError::Agent { category, source })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::LlmClient;
    use crate::config::ClientParams;
    use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
    use crate::ports::progress::NoProgress;
    use crate::use_cases::classify_question::{KeywordRouter, LlmRouter};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use switchboard_domain::{LlmResponse, TokenUsage};

    // ==================== Mocks ====================

    struct MockGateway {
        replies: Mutex<VecDeque<Result<LlmResponse, GatewayError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl MockGateway {
        fn new(replies: Vec<Result<LlmResponse, GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn system_prompts(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.system_prompt.clone())
                .collect()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("no reply".into())))
        }
    }

    #[derive(Default)]
    struct EventCollector {
        events: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl ConversationLogger for EventCollector {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type.to_string(), event.payload));
        }
    }

    fn reply(text: &str) -> Result<LlmResponse, GatewayError> {
        Ok(LlmResponse::from_text(text)
            .with_id("msg_test")
            .with_usage(TokenUsage::new(5, 7)))
    }

    fn use_case(gateway: Arc<MockGateway>, router: Arc<dyn QuestionRouter>) -> RouteQuestionUseCase {
        let client = LlmClient::new(gateway, ClientParams::default());
        RouteQuestionUseCase::new(
            router,
            AnswerAgent::technical(client.clone()),
            AnswerAgent::general(client),
        )
    }

    fn question(text: &str) -> Question {
        Question::try_new(text).unwrap()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_technical_question_goes_to_technical_agent() {
        let gateway = MockGateway::new(vec![reply(
            "MAIN_ANSWER: Chaining or open addressing.\nSUPPORTING_DETAILS:\n- Step 1: hash the key",
        )]);
        let uc = use_case(gateway.clone(), Arc::new(KeywordRouter::default()));

        let routed = uc
            .execute(&question("How does a hash table resolve collisions?"), &NoProgress)
            .await
            .unwrap();

        assert_eq!(routed.category, QuestionCategory::Technical);
        assert!(!routed.answer.main_answer().is_empty());
        assert_eq!(routed.answer.metadata.model, "claude-sonnet-4-5");
        assert_eq!(routed.answer.metadata.response_id, "msg_test");
        assert_eq!(routed.answer.metadata.token_usage.total(), 12);
        let prompts = gateway.system_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("software engineer"));
    }

    #[tokio::test]
    async fn test_general_question_goes_to_general_agent() {
        let gateway = MockGateway::new(vec![reply(
            "MAIN_ANSWER: It reduces stress.\nSUPPORTING_DETAILS:\n- Better sleep",
        )]);
        let uc = use_case(gateway.clone(), Arc::new(KeywordRouter::default()));

        let routed = uc
            .execute(&question("What are the benefits of meditation?"), &NoProgress)
            .await
            .unwrap();

        assert_eq!(routed.category, QuestionCategory::General);
        assert_eq!(routed.answer.main_answer(), "It reduces stress.");
        assert!(gateway.system_prompts()[0].contains("clear and concise"));
    }

    #[tokio::test]
    async fn test_llm_routing_makes_two_calls() {
        let gateway = MockGateway::new(vec![reply("general"), reply("MAIN_ANSWER: Yes.")]);
        let client = LlmClient::new(gateway.clone(), ClientParams::default());
        let uc = use_case(gateway.clone(), Arc::new(LlmRouter::new(client)));

        let routed = uc
            .execute(&question("Is the sea salty?"), &NoProgress)
            .await
            .unwrap();

        assert_eq!(routed.category, QuestionCategory::General);
        let prompts = gateway.system_prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("code or general"));
    }

    #[tokio::test]
    async fn test_agent_failure_is_reported_with_category() {
        let gateway = MockGateway::new(vec![Err(GatewayError::Authentication("bad key".into()))]);
        let logger = Arc::new(EventCollector::default());
        let uc = use_case(gateway, Arc::new(KeywordRouter::default()))
            .with_conversation_logger(logger.clone());

        let err = uc
            .execute(&question("What is a pointer?"), &NoProgress)
            .await
            .unwrap_err();

        assert!(err.is_authentication());
        assert!(matches!(
            err,
            RouteQuestionError::Agent {
                category: QuestionCategory::Technical,
                ..
            }
        ));
        let events = logger.events.lock().unwrap();
        let kinds: Vec<&str> = events.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(kinds, ["question_routed", "answer_failed"]);
    }

    #[tokio::test]
    async fn test_transcript_records_answer() {
        let gateway = MockGateway::new(vec![reply("MAIN_ANSWER: Blue light scatters more.")]);
        let logger = Arc::new(EventCollector::default());
        let uc = use_case(gateway, Arc::new(KeywordRouter::default()))
            .with_conversation_logger(logger.clone());

        uc.execute(&question("Why is the sky blue?"), &NoProgress)
            .await
            .unwrap();

        let events = logger.events.lock().unwrap();
        assert_eq!(events[1].0, "answer");
        assert_eq!(
            events[1].1["answer"]["content"]["main_answer"],
            "Blue light scatters more."
        );
        assert_eq!(events[0].1["category"], "general");
    }
}
