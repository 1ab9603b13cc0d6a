//! CLI command definitions

use clap::Parser;
use qa_domain::OutputFormat;
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for llm-qa
#[derive(Parser, Debug)]
#[command(name = "llm-qa")]
#[command(author, version, about = "Ask a hosted LLM a question from the terminal or a web form")]
#[command(long_about = r#"
llm-qa normalizes your question (lowercase, punctuation removed, whitespace
collapsed) and sends it to the Gemini API, then prints the answer.

Without a question it starts an interactive loop; type 'exit' or 'quit' to leave.
With --serve it starts a one-page web form instead.

The API key is read from GEMINI_API_KEY (see [provider].api_key_env).

Configuration files are loaded from (in priority order):
1. LLM_QA_* environment variables (e.g. LLM_QA_PROVIDER__MODEL)
2. --config <path>     Explicit config file
3. ./llm-qa.toml       Project-level config
4. ~/.config/llm-qa/config.toml   Global config

Example:
  llm-qa "What is the capital of France?"
  llm-qa -m gemini-2.5-pro
  llm-qa --serve --addr 127.0.0.1:8080
"#)]
pub struct Cli {
    /// Ask a single question and exit (omit for interactive mode)
    pub question: Option<String>,

    /// Serve the web form instead of reading from the terminal
    #[arg(long, conflicts_with = "question")]
    pub serve: bool,

    /// Listen address for --serve (overrides [server].addr)
    #[arg(long, value_name = "ADDR", requires = "serve")]
    pub addr: Option<SocketAddr>,

    /// Model to ask (overrides [provider].model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format for a single question
    #[arg(short, long, value_enum)]
    pub output: Option<CliOutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner and the processed question
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Output format as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliOutputFormat {
    /// Answer banner
    Text,
    /// Question, processed question and answer as JSON
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}
