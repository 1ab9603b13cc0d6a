//! Ask Question use case
//!
//! The pipeline shared by every entry point: blank check, normalization,
//! then one answer fetch.

use crate::ports::progress::{AskProgressNotifier, NoProgress};
use crate::use_cases::fetch_answer::FetchAnswerUseCase;
use qa_domain::{AskResult, ProcessedQuestion, Question, preview};
use tracing::debug;

/// Use case for handling one raw question from a user
#[derive(Clone)]
pub struct AskQuestionUseCase {
    fetcher: FetchAnswerUseCase,
}

impl AskQuestionUseCase {
    pub fn new(fetcher: FetchAnswerUseCase) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &FetchAnswerUseCase {
        &self.fetcher
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, raw: &str) -> Option<AskResult> {
        self.execute_with_progress(raw, &NoProgress).await
    }

    /// Execute with progress callbacks
    ///
    /// Returns None for blank input; nothing is sent in that case.
    pub async fn execute_with_progress(
        &self,
        raw: &str,
        progress: &dyn AskProgressNotifier,
    ) -> Option<AskResult> {
        let question = Question::try_new(raw)?;
        let processed = ProcessedQuestion::from_question(&question);
        debug!(processed = %preview(processed.content(), 200), "Processed question");
        progress.on_question_processed(&processed);

        progress.on_request_start(self.fetcher.model());
        let answer = self.fetcher.execute(&processed).await;
        progress.on_request_complete(answer.is_success());

        Some(AskResult {
            question,
            processed,
            answer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockCredentials, MockGateway, RecordingProgress};
    use qa_domain::Answer;
    use std::sync::Arc;

    fn use_case(gateway: Arc<MockGateway>, key: Option<&'static str>) -> AskQuestionUseCase {
        AskQuestionUseCase::new(FetchAnswerUseCase::new(
            gateway,
            Arc::new(MockCredentials(key)),
        ))
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let gateway = Arc::new(MockGateway::answering("unused"));
        let ask = use_case(gateway.clone(), Some("key"));

        assert!(ask.execute("").await.is_none());
        assert!(ask.execute("   \t").await.is_none());
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_full_exchange() {
        let gateway = Arc::new(MockGateway::answering("I am fine."));
        let ask = use_case(gateway.clone(), Some("key"));

        let result = ask.execute("Hello, World!  How ARE you?").await.unwrap();

        assert_eq!(result.question.content(), "Hello, World!  How ARE you?");
        assert_eq!(result.processed.content(), "hello world how are you");
        assert_eq!(result.answer, Answer::Text("I am fine.".to_string()));
        assert!(
            gateway
                .last_request()
                .unwrap()
                .prompt
                .ends_with("\n\nhello world how are you")
        );
    }

    #[tokio::test]
    async fn test_missing_credential_still_returns_exchange() {
        let gateway = Arc::new(MockGateway::answering("unused"));
        let ask = use_case(gateway.clone(), None);

        let result = ask.execute("Why?").await.unwrap();

        assert_eq!(result.processed.content(), "why");
        assert!(result.answer.to_string().starts_with("ERROR:"));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_progress_callbacks_in_order() {
        let gateway = Arc::new(MockGateway::answering("ok"));
        let ask = use_case(gateway, Some("key"));
        let progress = RecordingProgress::default();

        ask.execute_with_progress("What?", &progress).await;

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "processed:what".to_string(),
                "start:gemini-2.5-flash".to_string(),
                "complete:true".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_progress_not_notified_for_blank_input() {
        let gateway = Arc::new(MockGateway::answering("ok"));
        let ask = use_case(gateway, Some("key"));
        let progress = RecordingProgress::default();

        ask.execute_with_progress("  ", &progress).await;

        assert!(progress.events.lock().unwrap().is_empty());
    }
}
