//! Question normalization
//!
//! Turns free-form user text into the canonical form sent to the model:
//! lowercase, ASCII punctuation replaced by spaces, whitespace runs collapsed
//! and the ends trimmed.

use super::question::Question;
use serde::{Deserialize, Serialize};

/// Normalize raw question text.
///
/// 1. Lowercase (locale-independent)
/// 2. Replace every ASCII punctuation character with a space
/// 3. Collapse runs of whitespace into a single space
/// 4. Trim leading/trailing whitespace
///
/// Punctuation outside the ASCII range (e.g. `¿`, `「`) is kept as-is.
/// The ASCII information separators U+001C..=U+001F count as whitespace.
/// Total over all inputs; the empty string maps to itself.
pub fn normalize(question: &str) -> String {
    let spaced: String = question
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    spaced
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// The normalized form of a [`Question`] (Value Object)
///
/// May be empty when the question consisted only of punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessedQuestion {
    content: String,
}

impl ProcessedQuestion {
    /// Normalize a validated question
    pub fn from_question(question: &Question) -> Self {
        Self::from_raw(question.content())
    }

    /// Normalize arbitrary text
    pub fn from_raw(text: &str) -> Self {
        Self {
            content: normalize(text),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for ProcessedQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
