//! Presentation layer for llm-qa
//!
//! This crate contains the CLI definition, the interactive question loop,
//! console formatting, progress display and the one-page web form.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use chat::{ChatRepl, LineAction, LineEvent, LineSource, ReedlineSource};
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerProgress;
pub use web::{AppState, create_app, serve};
