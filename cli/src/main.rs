//! CLI entrypoint for llm-qa
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use qa_application::{AskQuestionUseCase, FetchAnswerUseCase, NoProgress};
use qa_domain::{Model, OutputFormat};
use qa_infrastructure::{
    ConfigLoader, EnvCredentialSource, FileConfig, FileServerConfig, GeminiConfig, GeminiGateway,
};
use qa_presentation::{
    AppState, ChatRepl, Cli, ConsoleFormatter, OutputConfig, SpinnerProgress,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli);
    config.validate().context("Invalid configuration")?;

    info!("Starting llm-qa");

    ConsoleFormatter::set_color(config.output.color);
    let output = if cli.quiet {
        OutputConfig::quiet()
    } else {
        OutputConfig {
            show_processed: config.output.show_processed,
            show_progress: config.output.show_progress,
        }
    };

    // === Dependency Injection ===
    let credentials = Arc::new(EnvCredentialSource::with_configured_key(
        config.provider.api_key_env.clone(),
        config.provider.api_key.as_deref(),
    ));
    let gateway = Arc::new(GeminiGateway::new_or_degraded(GeminiConfig {
        base_url: config.provider.base_url.clone(),
        timeout: config.provider.timeout(),
    }));

    let model = match &cli.model {
        Some(name) if name.trim().is_empty() => bail!("--model cannot be empty"),
        Some(name) => Model::from(name.as_str()),
        None => config.provider.model(),
    };
    info!(model = %model, "Using model");

    let ask = AskQuestionUseCase::new(FetchAnswerUseCase::new(gateway, credentials).with_model(model));

    if cli.serve {
        let addr = resolve_addr(cli.addr, &config.server)?;
        qa_presentation::serve(addr, AppState::new(ask))
            .await
            .with_context(|| format!("Web server on {} failed", addr))?;
        return Ok(());
    }

    if let Some(question) = cli.question {
        let format = cli.output.map(OutputFormat::from).unwrap_or(config.output.format);
        return ask_once(&ask, &question, format, &output).await;
    }

    ChatRepl::new(ask).with_output(output).run().await;
    Ok(())
}

async fn ask_once(
    ask: &AskQuestionUseCase,
    question: &str,
    format: OutputFormat,
    output: &OutputConfig,
) -> Result<()> {
    let spinner;
    let progress: &dyn qa_application::AskProgressNotifier =
        if output.show_progress && format == OutputFormat::Text {
            spinner = SpinnerProgress::new();
            &spinner
        } else {
            &NoProgress
        };

    let Some(result) = ask.execute_with_progress(question, progress).await else {
        eprintln!("Nothing to ask: the question is empty.");
        return Ok(());
    };

    match format {
        OutputFormat::Text => println!("{}", ConsoleFormatter::format(&result, output)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&result)),
    }

    Ok(())
}

/// `--addr` wins; `server.addr` is only parsed when it is actually used
fn resolve_addr(flag: Option<SocketAddr>, server: &FileServerConfig) -> Result<SocketAddr> {
    match flag {
        Some(addr) => Ok(addr),
        None => server
            .socket_addr()
            .context("Invalid server.addr in configuration"),
    }
}

fn load_config(cli: &Cli) -> FileConfig {
    if cli.no_config {
        return ConfigLoader::load_defaults();
    }
    match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            eprintln!("Warning: failed to load config ({}), using defaults", e);
            ConfigLoader::load_defaults()
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(addr: &str) -> FileServerConfig {
        FileServerConfig {
            addr: addr.to_string(),
        }
    }

    #[test]
    fn test_addr_flag_skips_bad_config_addr() {
        let flag: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        assert_eq!(resolve_addr(Some(flag), &server("localhost")).unwrap(), flag);
    }

    #[test]
    fn test_config_addr_used_without_flag() {
        let addr = resolve_addr(None, &server("127.0.0.1:5000")).unwrap();
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn test_bad_config_addr_rejected_without_flag() {
        assert!(resolve_addr(None, &server("localhost")).is_err());
    }
}
