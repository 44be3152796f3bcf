//! Quiz request types and the item abstraction the selector works over

use crate::types::{lenient_int, CategoryId, Question, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifiers already served in the current quiz
pub type ExclusionSet = HashSet<QuestionId>;

/// Category id the frontend sends for "all categories".
///
/// No stored category uses id 0, so a request for it is read as "no
/// filter" rather than a filter that can never match.
pub const ALL_CATEGORIES: CategoryId = 0;

/// Anything the quiz selector can pick from
pub trait QuizItem {
    fn item_id(&self) -> QuestionId;
    fn category_id(&self) -> CategoryId;
}

impl QuizItem for Question {
    fn item_id(&self) -> QuestionId {
        self.id
    }

    fn category_id(&self) -> CategoryId {
        self.category
    }
}

impl<T: QuizItem + ?Sized> QuizItem for &T {
    fn item_id(&self) -> QuestionId {
        (**self).item_id()
    }

    fn category_id(&self) -> CategoryId {
        (**self).category_id()
    }
}

/// Category selected for a quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "lenient_int")]
    pub id: CategoryId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Body of a quiz-round request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    pub fn new(previous_questions: Vec<QuestionId>, category: Option<CategoryId>) -> Self {
        Self {
            previous_questions,
            quiz_category: category.map(|id| QuizCategory { id, kind: None }),
        }
    }

    /// Category to restrict to; `None` when absent or "all"
    pub fn category_filter(&self) -> Option<CategoryId> {
        self.quiz_category
            .as_ref()
            .map(|c| c.id)
            .filter(|&id| id != ALL_CATEGORIES)
    }

    pub fn exclusion_set(&self) -> ExclusionSet {
        self.previous_questions.iter().copied().collect()
    }
}
