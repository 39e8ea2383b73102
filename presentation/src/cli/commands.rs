//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use switchboard_application::RoutingStrategy;
use switchboard_domain::OutputFormat;

/// How answers are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Pretty-printed JSON
    Json,
    /// One JSON object per line
    Compact,
    /// Human-readable text
    Text,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Json => OutputFormat::Json,
            OutputArg::Compact => OutputFormat::Compact,
            OutputArg::Text => OutputFormat::Text,
        }
    }
}

/// How questions are routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Keyword heuristic, no extra model call
    Keyword,
    /// Ask the model to classify first
    Llm,
}

impl From<StrategyArg> for RoutingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Keyword => RoutingStrategy::Keyword,
            StrategyArg::Llm => RoutingStrategy::Llm,
        }
    }
}

/// CLI arguments for switchboard
#[derive(Parser, Debug)]
#[command(name = "switchboard")]
#[command(author, version, about = "Route questions to a technical or a general LLM agent")]
#[command(long_about = r#"
Switchboard classifies each question as technical or general and hands it to
the matching agent. Answers are printed as structured JSON:

  { "content": { "main_answer", "supporting_details" }, "metadata": { ... } }

Without a question argument, questions are read from stdin one per line
until 'q', 'quit' or end of input.

Configuration files are loaded from (in priority order):
1. SWITCHBOARD_<SECTION>__<KEY>   Environment variables
2. --config <path>                Explicit config file
3. ./switchboard.toml             Project-level config
4. ~/.config/switchboard/config.toml   Global config

The API key is read from ANTHROPIC_API_KEY (or provider.api_key_env).
A .env file in the working directory is loaded first.

Example:
  switchboard "How does a hash table resolve collisions?"
  switchboard --strategy llm -o text
"#)]
pub struct Cli {
    /// Question to answer (starts the interactive loop when omitted)
    pub question: Option<String>,

    /// Routing strategy
    #[arg(short, long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<StrategyArg>,

    /// Model identifier for all requests
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of every question and answer to PATH
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
