//! REPL (Read-Eval-Print Loop) for interactive questions

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SpinnerProgress;
use qa_application::{AskProgressNotifier, AskQuestionUseCase, NoProgress};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use tracing::debug;

/// One read from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Line(String),
    Interrupted,
    Eof,
    Error(String),
}

/// Where the REPL reads its lines from
pub trait LineSource {
    fn read_line(&mut self) -> LineEvent;
}

/// Interactive line editor backed by reedline
pub struct ReedlineSource {
    editor: Reedline,
    prompt: DefaultPrompt,
}

impl ReedlineSource {
    pub fn new() -> Self {
        Self {
            editor: Reedline::create(),
            prompt: DefaultPrompt::new(
                DefaultPromptSegment::Basic("Enter your question".to_string()),
                DefaultPromptSegment::Empty,
            ),
        }
    }
}

impl Default for ReedlineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for ReedlineSource {
    fn read_line(&mut self) -> LineEvent {
        match self.editor.read_line(&self.prompt) {
            Ok(Signal::Success(line)) => LineEvent::Line(line),
            Ok(Signal::CtrlC) => LineEvent::Interrupted,
            Ok(Signal::CtrlD) => LineEvent::Eof,
            #[allow(unreachable_patterns)]
            Ok(_) => LineEvent::Eof,
            Err(e) => LineEvent::Error(e.to_string()),
        }
    }
}

/// What to do with a line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Exit,
    Skip,
    Ask(String),
}

impl LineAction {
    /// `exit`/`quit` in any case end the loop; blank lines are skipped
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            LineAction::Exit
        } else if trimmed.is_empty() {
            LineAction::Skip
        } else {
            LineAction::Ask(line.to_string())
        }
    }
}

/// Interactive question REPL
pub struct ChatRepl {
    use_case: AskQuestionUseCase,
    output: OutputConfig,
}

impl ChatRepl {
    pub fn new(use_case: AskQuestionUseCase) -> Self {
        Self {
            use_case,
            output: OutputConfig::default(),
        }
    }

    /// Set terminal output options
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Run the REPL on the terminal
    pub async fn run(&self) {
        let mut source = ReedlineSource::new();
        self.run_with(&mut source).await;
    }

    /// Run the REPL on any line source; returns the number of questions asked
    pub async fn run_with(&self, source: &mut dyn LineSource) -> usize {
        self.print_welcome();
        let mut asked = 0;

        loop {
            match source.read_line() {
                LineEvent::Line(line) => match LineAction::classify(&line) {
                    LineAction::Exit => {
                        println!("Bye!");
                        break;
                    }
                    LineAction::Skip => continue,
                    LineAction::Ask(question) => {
                        self.process_question(&question).await;
                        asked += 1;
                    }
                },
                LineEvent::Interrupted => {
                    println!("^C");
                    continue;
                }
                LineEvent::Eof => {
                    println!("Bye!");
                    break;
                }
                LineEvent::Error(err) => {
                    eprintln!("Error: {}", err);
                    break;
                }
            }
        }

        debug!(asked, "REPL finished");
        asked
    }

    fn print_welcome(&self) {
        println!();
        println!("LLM Q&A - model {}", self.use_case.fetcher().model());
        println!("Enter 'exit' or 'quit' to close the application.");
        println!();
    }

    async fn process_question(&self, question: &str) {
        println!();

        let spinner;
        let progress: &dyn AskProgressNotifier = if self.output.show_progress {
            spinner = SpinnerProgress::new();
            &spinner
        } else {
            &NoProgress
        };

        if let Some(result) = self.use_case.execute_with_progress(question, progress).await {
            println!("{}", ConsoleFormatter::format(&result, &self.output));
        }
        println!();
    }
}
