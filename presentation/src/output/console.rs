//! Console output formatter for answers

use crate::config::OutputConfig;
use colored::Colorize;
use qa_domain::{Answer, AskResult};

const ANSWER_HEADER: &str = "--- LLM ANSWER ---";
const ANSWER_FOOTER: &str = "------------------";

/// Formats question/answer exchanges for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for the whole process
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Processed question line plus the answer banner
    pub fn format(result: &AskResult, config: &OutputConfig) -> String {
        let mut output = String::new();

        if config.show_processed {
            output.push_str(&format!(
                "{} '{}'\n\n",
                "Processed question:".dimmed(),
                result.processed
            ));
        }

        output.push_str(&Self::format_answer(&result.answer));
        output
    }

    /// The answer between header and footer lines
    pub fn format_answer(answer: &Answer) -> String {
        let body = match answer {
            Answer::Text(text) => text.clone(),
            Answer::Failed(failure) => failure.to_string().red().to_string(),
        };
        format!(
            "{}\n{}\n{}",
            ANSWER_HEADER.cyan().bold(),
            body,
            ANSWER_FOOTER.cyan()
        )
    }

    /// The full exchange as pretty JSON
    pub fn format_json(result: &AskResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|e| {
            format!("{{\"error\": \"failed to serialize result: {}\"}}", e)
        })
    }
}
