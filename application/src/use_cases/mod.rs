//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_question;
pub mod fetch_answer;

#[cfg(test)]
pub(crate) mod test_support;
