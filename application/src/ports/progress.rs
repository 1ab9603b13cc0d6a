//! Progress notification port
//!
//! Lets entry points show what the ask pipeline is doing while the
//! completion request is in flight.

use qa_domain::{Model, ProcessedQuestion};

/// Callbacks fired by [`AskQuestionUseCase`](crate::AskQuestionUseCase)
///
/// Implementations live in the presentation layer.
pub trait AskProgressNotifier: Send + Sync {
    /// Called once the question has been normalized
    fn on_question_processed(&self, _processed: &ProcessedQuestion) {}

    /// Called right before the completion request is sent
    fn on_request_start(&self, model: &Model);

    /// Called when the answer (or failure) is available
    fn on_request_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AskProgressNotifier for NoProgress {
    fn on_request_start(&self, _model: &Model) {}
    fn on_request_complete(&self, _success: bool) {}
}
