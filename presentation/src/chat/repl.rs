//! Line-oriented question loop

use crate::config::ReplConfig;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use switchboard_application::{
    NoProgress, ProgressNotifier, RouteQuestionError, RouteQuestionUseCase, RoutedAnswer,
};
use switchboard_domain::Question;
use thiserror::Error;
use tracing::debug;

const PROMPT: &str = "Enter your question (or 'q' to quit): ";

/// Whether `line` ends the loop
pub fn is_quit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

/// Failure to answer one question
#[derive(Debug, Error)]
pub enum AskError {
    #[error(transparent)]
    Route(#[from] RouteQuestionError),

    #[error("failed to write answer: {0}")]
    Output(#[from] io::Error),
}

/// Counts for one loop run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub answered: usize,
    pub failed: usize,
}

/// Reads questions one per line and prints each answer
pub struct QuestionLoop {
    use_case: Arc<RouteQuestionUseCase>,
    formatter: Box<dyn OutputFormatter>,
    config: ReplConfig,
    progress: Arc<dyn ProgressNotifier>,
}

impl QuestionLoop {
    pub fn new(
        use_case: Arc<RouteQuestionUseCase>,
        formatter: Box<dyn OutputFormatter>,
        config: ReplConfig,
    ) -> Self {
        Self {
            use_case,
            formatter,
            config,
            progress: Arc::new(NoProgress),
        }
    }

    /// Report routing stages to `progress`.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Route one question and print the answer to `out`.
    pub async fn ask(
        &self,
        question: &Question,
        out: &mut impl Write,
    ) -> Result<RoutedAnswer, AskError> {
        let routed = self
            .use_case
            .execute(question, self.progress.as_ref())
            .await?;

        writeln!(out, "{}", self.formatter.format(&routed))?;
        out.flush()?;
        Ok(routed)
    }

    /// Read questions from `input` until a quit command or end of input.
    ///
    /// Only answers go to `out`. The prompt and per-question errors go to
    /// `err`, and the loop carries on after a routing failure.
    pub async fn run(
        &self,
        mut input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<LoopSummary> {
        let mut summary = LoopSummary::default();
        let mut line = String::new();

        loop {
            write!(err, "{}", PROMPT)?;
            err.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(err)?;
                break;
            }

            if is_quit_command(&line) {
                break;
            }

            let Some(question) = Question::try_new(line.as_str()) else {
                continue;
            };

            match self.ask(&question, out).await {
                Ok(_) => summary.answered += 1,
                Err(AskError::Route(e)) => {
                    summary.failed += 1;
                    self.report_error(&e, err)?;
                }
                Err(AskError::Output(e)) => return Err(e),
            }
        }

        debug!(
            "Question loop finished: {} answered, {} failed",
            summary.answered, summary.failed
        );
        Ok(summary)
    }

    /// Print a routing error, with a credential hint for auth failures.
    pub fn report_error(&self, error: &RouteQuestionError, err: &mut impl Write) -> io::Result<()> {
        writeln!(err, "{} {}", "Error:".red().bold(), error)?;
        if error.is_authentication() {
            writeln!(
                err,
                "{} check that {} holds a valid API key",
                "hint:".yellow(),
                self.config.api_key_env
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::console::JsonFormatter;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use switchboard_application::{
        AnswerAgent, ClientParams, CompletionRequest, GatewayError, KeywordRouter, LlmClient,
        LlmGateway,
    };
    use switchboard_domain::LlmResponse;

    // ==================== Mock Gateway ====================

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

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
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

    fn question_loop(gateway: Arc<MockGateway>) -> QuestionLoop {
        let client = LlmClient::new(gateway, ClientParams::default());
        let use_case = RouteQuestionUseCase::new(
            Arc::new(KeywordRouter::default()),
            AnswerAgent::technical(client.clone()),
            AnswerAgent::general(client),
        );
        QuestionLoop::new(
            Arc::new(use_case),
            Box::new(JsonFormatter::compact()),
            ReplConfig::default(),
        )
    }

    fn reply(text: &str) -> Result<LlmResponse, GatewayError> {
        Ok(LlmResponse::from_text(text).with_id("msg_loop"))
    }

    async fn run(lp: &QuestionLoop, input: &str) -> (LoopSummary, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = lp.run(input.as_bytes(), &mut out, &mut err).await.unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn answers(out: &str) -> Vec<serde_json::Value> {
        out.lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    // ==================== Tests ====================

    #[test]
    fn test_quit_commands() {
        assert!(is_quit_command("q"));
        assert!(is_quit_command("  QUIT \n"));
        assert!(is_quit_command("Q"));
        assert!(!is_quit_command("quite"));
        assert!(!is_quit_command("q?"));
    }

    #[tokio::test]
    async fn test_quit_first_makes_no_calls() {
        let gateway = MockGateway::new(vec![]);
        let lp = question_loop(gateway.clone());

        let (summary, out, _) = run(&lp, "q\nWhat is Rust?\n").await;

        assert_eq!(gateway.calls(), 0);
        assert_eq!(summary, LoopSummary::default());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_technical_then_general() {
        let gateway = MockGateway::new(vec![
            reply("MAIN_ANSWER: Chaining or open addressing.\nSUPPORTING_DETAILS:\n- Step 1: hash"),
            reply("MAIN_ANSWER: Less stress.\nSUPPORTING_DETAILS:\n- Better sleep"),
        ]);
        let lp = question_loop(gateway.clone());

        let (summary, out, err) = run(
            &lp,
            "How does a hash table resolve collisions?\n\nWhat are the benefits of meditation?\nquit\n",
        )
        .await;

        assert_eq!(summary.answered, 2);
        assert_eq!(err, PROMPT.repeat(4));
        let printed = answers(&out);
        assert_eq!(printed.len(), 2);
        assert_eq!(printed[0]["content"]["main_answer"], "Chaining or open addressing.");
        assert_eq!(printed[1]["content"]["main_answer"], "Less stress.");

        let requests = gateway.requests.lock().unwrap();
        assert!(requests[0].system_prompt.contains("software engineer"));
        assert!(requests[1].system_prompt.contains("clear and concise"));
    }

    #[tokio::test]
    async fn test_errors_are_printed_and_loop_continues() {
        let gateway = MockGateway::new(vec![
            Err(GatewayError::Authentication("invalid x-api-key".into())),
            reply("MAIN_ANSWER: Rayleigh scattering."),
        ]);
        let lp = question_loop(gateway.clone());

        let (summary, out, err) = run(&lp, "What is a compiler?\nWhy is the sky blue?\n").await;

        assert_eq!(summary, LoopSummary { answered: 1, failed: 1 });
        assert!(err.contains("invalid x-api-key"));
        assert!(err.contains("ANTHROPIC_API_KEY"));
        assert_eq!(answers(&out).len(), 1);
    }

    #[tokio::test]
    async fn test_end_of_input_stops() {
        let gateway = MockGateway::new(vec![reply("MAIN_ANSWER: Yes.")]);
        let lp = question_loop(gateway.clone());

        let (summary, _, _) = run(&lp, "Is water wet?").await;

        assert_eq!(summary.answered, 1);
        assert_eq!(gateway.calls(), 1);
    }

    #[derive(Default)]
    struct StageRecorder {
        stages: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for StageRecorder {
        fn on_classified(&self, category: switchboard_domain::QuestionCategory) {
            self.stages.lock().unwrap().push(format!("classified:{category}"));
        }
        fn on_agent_start(&self, category: switchboard_domain::QuestionCategory) {
            self.stages.lock().unwrap().push(format!("start:{category}"));
        }
        fn on_agent_complete(&self, category: switchboard_domain::QuestionCategory, ok: bool) {
            self.stages.lock().unwrap().push(format!("done:{category}:{ok}"));
        }
    }

    #[tokio::test]
    async fn test_progress_follows_each_question() {
        let gateway = MockGateway::new(vec![reply("MAIN_ANSWER: Yes.")]);
        let recorder = Arc::new(StageRecorder::default());
        let lp = question_loop(gateway).with_progress(recorder.clone());

        run(&lp, "Is water wet?
q
").await;

        assert_eq!(
            *recorder.stages.lock().unwrap(),
            ["classified:general", "start:general", "done:general:true"]
        );
    }

    #[tokio::test]
    async fn test_stdout_carries_only_answers() {
        let gateway = MockGateway::new(vec![reply("MAIN_ANSWER: Yes.")]);
        let lp = question_loop(gateway);

        let (summary, out, err) = run(&lp, "Is water wet?").await;

        assert_eq!(summary.answered, 1);
        assert!(!out.contains(PROMPT));
        assert_eq!(answers(&out).len(), 1);
        assert!(err.starts_with(PROMPT));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_ask_reports_write_failure() {
        let gateway = MockGateway::new(vec![reply("MAIN_ANSWER: Blue.")]);
        let lp = question_loop(gateway);

        let err = lp
            .ask(&Question::try_new("What color is the sky?").unwrap(), &mut ClosedPipe)
            .await
            .unwrap_err();

        assert!(matches!(err, AskError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[tokio::test]
    async fn test_run_stops_on_write_failure() {
        let gateway = MockGateway::new(vec![reply("MAIN_ANSWER: Yes."), reply("MAIN_ANSWER: No.")]);
        let lp = question_loop(gateway.clone());
        let mut err = Vec::new();

        let result = lp
            .run("Is water wet?\nIs fire cold?\n".as_bytes(), &mut ClosedPipe, &mut err)
            .await;

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_ask_prints_one_answer() {
        let gateway = MockGateway::new(vec![reply("MAIN_ANSWER: Blue.")]);
        let lp = question_loop(gateway);
        let mut out = Vec::new();

        let routed = lp
            .ask(&Question::try_new("What color is the sky?").unwrap(), &mut out)
            .await
            .unwrap();

        assert_eq!(routed.answer.main_answer(), "Blue.");
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.lines().count(), 1);
    }
}
