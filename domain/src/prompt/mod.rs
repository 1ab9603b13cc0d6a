//! Prompt templates sent to the completion model.

mod template;

pub use template::PromptTemplate;
