//! Common types used throughout the trivia API
//!
//! This module contains the question and category records, the insert
//! payload, and the identifier aliases shared by every layer.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Question identifier
pub type QuestionId = i64;

/// Category identifier
pub type CategoryId = i64;

/// Lowest accepted difficulty
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest accepted difficulty
pub const MAX_DIFFICULTY: i32 = 5;

// ============================================================================
// Records
// ============================================================================

/// A trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl Question {
    /// Check a player's guess against the stored answer.
    ///
    /// Comparison ignores surrounding whitespace and ASCII/Unicode case.
    pub fn check_answer(&self, guess: &str) -> bool {
        let guess = guess.trim();
        !guess.is_empty() && guess.to_lowercase() == self.answer.trim().to_lowercase()
    }
}

/// A question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name ("Science", "Art", ...)
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

// ============================================================================
// Insert Payload
// ============================================================================

/// Payload for creating a new question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "lenient_int")]
    pub category: CategoryId,
    #[serde(default = "default_difficulty", deserialize_with = "lenient_int")]
    pub difficulty: i32,
}

fn default_difficulty() -> i32 {
    MIN_DIFFICULTY
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: i32,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Field-level checks that need no store access.
    ///
    /// Category existence is checked by the store on insert.
    pub fn validate(&self) -> crate::Result<()> {
        if self.question.trim().is_empty() {
            return Err(crate::Error::validation("question must not be empty"));
        }
        if self.answer.trim().is_empty() {
            return Err(crate::Error::validation("answer must not be empty"));
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(crate::Error::validation(format!(
                "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {}",
                self.difficulty
            )));
        }
        Ok(())
    }

    /// Attach an id, producing the stored record
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question.trim().to_string(),
            answer: self.answer.trim().to_string(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Accept an integer either as a JSON number or as a numeric string.
///
/// Form selects and object keys hand ids over as strings.
pub(crate) fn lenient_int<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Int(T),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer '{s}'"))),
    }
}
