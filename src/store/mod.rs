//! Question storage
//!
//! The [`QuestionStore`] trait is the data-access capability handed to the
//! service layer. Pagination, search and quiz selection never see a store;
//! they only receive the collections it returns.
//!
//! Two implementations ship with the crate: [`MemoryStore`] here and the
//! DuckDB-backed [`crate::database::DatabaseStore`].

mod memory;
pub mod seed;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::types::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Data-access capability for questions and categories.
///
/// Every listing is ordered by ascending id.
pub trait QuestionStore: Send + Sync {
    /// All categories
    fn categories(&self) -> Result<Vec<Category>>;

    /// All questions
    fn questions(&self) -> Result<Vec<Question>>;

    /// Questions in one category
    fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case
    fn search(&self, term: &str) -> Result<Vec<Question>>;

    /// A single question
    fn question(&self, id: QuestionId) -> Result<Option<Question>>;

    /// Validate and store a new question, returning the stored record
    fn insert(&self, question: NewQuestion) -> Result<Question>;

    /// Remove a question; `false` if it did not exist
    fn delete(&self, id: QuestionId) -> Result<bool>;

    /// Whether a category exists
    fn category_exists(&self, category: CategoryId) -> Result<bool> {
        Ok(self.categories()?.iter().any(|c| c.id == category))
    }

    /// Candidate pool for a quiz round
    fn quiz_pool(&self, category: Option<CategoryId>) -> Result<Vec<Question>> {
        match category {
            Some(id) => self.questions_in_category(id),
            None => self.questions(),
        }
    }
}
