//! Answer formatters for console display

use crate::config::OutputConfig;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use switchboard_application::RoutedAnswer;
use switchboard_domain::OutputFormat;

/// Answer serialized as JSON, pretty or one line
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, routed: &RoutedAnswer) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&routed.answer)
        } else {
            serde_json::to_string(&routed.answer)
        };
        // Answer holds only strings, numbers and lists
        rendered.unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

/// Human-readable answer layout
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        format!("── {} ──", title).cyan().bold().to_string()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, routed: &RoutedAnswer) -> String {
        let answer = &routed.answer;
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{} agent", routed.category)));
        output.push('\n');
        output.push_str(answer.main_answer());
        output.push('\n');

        if !answer.supporting_details().is_empty() {
            output.push('\n');
            for (i, detail) in answer.supporting_details().iter().enumerate() {
                output.push_str(&format!("  {} {}\n", format!("{}.", i + 1).yellow(), detail));
            }
        }

        let meta = &answer.metadata;
        output.push('\n');
        output.push_str(
            &format!(
                "{} · {} · {} in / {} out tokens · run {}",
                meta.model,
                if meta.stop_reason.is_empty() { "-" } else { meta.stop_reason.as_str() },
                meta.token_usage.input_tokens,
                meta.token_usage.output_tokens,
                meta.run_id
            )
            .dimmed()
            .to_string(),
        );
        output
    }
}

/// Pick the formatter for the configured output format
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Json => Box::new(JsonFormatter::pretty()),
        OutputFormat::Compact => Box::new(JsonFormatter::compact()),
        OutputFormat::Text => Box::new(ConsoleFormatter),
    }
}
