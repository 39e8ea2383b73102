//! CLI entrypoint for switchboard
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io;
use std::sync::Arc;
use switchboard_application::{
    AnswerAgent, KeywordRouter, LlmClient, LlmRouter, QuestionRouter, RouteQuestionUseCase,
    RoutingStrategy,
};
use switchboard_domain::Question;
use switchboard_infrastructure::{
    AnthropicGateway, AnthropicSettings, ConfigLoader, FileConfig, JsonlConversationLogger,
};
use switchboard_presentation::{
    AskError, Cli, OutputConfig, QuestionLoop, ReplConfig, formatter_for, notifier_for,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // .env first so both config and the API key can come from it
    let dotenv = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
        return Ok(());
    }

    let config = load_config(&cli)?;
    info!(
        "Starting switchboard (model {}, {} routing)",
        config.model.name, config.routing.strategy
    );

    let output = OutputConfig {
        format: config.output.format,
        color: config.output.color,
    }
    .with_cli_overrides(&cli);
    let repl = ReplConfig {
        show_progress: config.repl.show_progress,
        api_key_env: config.provider.api_key_env.clone(),
    }
    .with_cli_overrides(&cli);

    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let api_key = ConfigLoader::resolve_api_key(&config)?;
    let gateway = Arc::new(AnthropicGateway::new(
        AnthropicSettings::new(api_key)
            .with_base_url(&config.provider.base_url)
            .with_api_version(&config.provider.api_version)
            .with_timeout(config.request_timeout()),
    )?);

    let params = config.client_params();
    if !params.model.is_known() {
        warn!("Model '{}' is not a built-in identifier, sending it as-is", params.model);
    }

    let progress = notifier_for(repl.show_progress);
    let client = LlmClient::new(gateway, params).with_progress(progress.clone());

    let router: Arc<dyn QuestionRouter> = match config.routing.strategy {
        RoutingStrategy::Keyword => Arc::new(KeywordRouter::new(config.routing.keyword_classifier())),
        RoutingStrategy::Llm => Arc::new(
            LlmRouter::new(client.clone()).with_fallback(config.routing.keyword_classifier()),
        ),
    };

    let mut use_case = RouteQuestionUseCase::new(
        router,
        AnswerAgent::technical(client.clone()),
        AnswerAgent::general(client),
    );
    if let Some(path) = &cli.log_file {
        let logger = JsonlConversationLogger::open(path)
            .with_context(|| format!("cannot open transcript {}", path.display()))?;
        info!("Writing transcript to {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    let question_loop = QuestionLoop::new(Arc::new(use_case), formatter_for(&output), repl)
        .with_progress(progress);

    let mut stdout = io::stdout().lock();

    // Single question mode
    if let Some(text) = &cli.question {
        let question = Question::try_from(text.as_str())?;
        match question_loop.ask(&question, &mut stdout).await {
            Ok(_) => return Ok(()),
            Err(AskError::Route(e)) => {
                question_loop.report_error(&e, &mut io::stderr())?;
                bail!("could not answer the question");
            }
            Err(AskError::Output(e)) => return Err(e).context("could not print the answer"),
        }
    }

    let summary = question_loop
        .run(io::stdin().lock(), &mut stdout, &mut io::stderr())
        .await?;
    info!(
        "Session ended: {} answered, {} failed",
        summary.answered, summary.failed
    );
    Ok(())
}

/// Load, override and validate configuration
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(strategy) = cli.strategy {
        config.routing.strategy = strategy.into();
    }

    config.validate().context("invalid command-line override")?;
    Ok(config)
}
