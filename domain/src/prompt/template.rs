//! Prompt templates for the question/answer flow

use crate::core::normalize::ProcessedQuestion;

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction placed before the question
    pub const ANSWER_INSTRUCTION: &'static str =
        "Answer the following question clearly and concisely:";

    /// User prompt wrapping a processed question
    pub fn answer_concisely(question: &ProcessedQuestion) -> String {
        format!("{}\n\n{}", Self::ANSWER_INSTRUCTION, question.content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_prompt_layout() {
        let q = ProcessedQuestion::from_raw("What is the capital of France?");
        assert_eq!(
            PromptTemplate::answer_concisely(&q),
            "Answer the following question clearly and concisely:\n\nwhat is the capital of france"
        );
    }

    #[test]
    fn test_answer_prompt_with_empty_question() {
        let q = ProcessedQuestion::from_raw("?!");
        assert_eq!(
            PromptTemplate::answer_concisely(&q),
            "Answer the following question clearly and concisely:\n\n"
        );
    }
}
