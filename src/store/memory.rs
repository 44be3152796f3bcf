//! In-memory question store

use super::{seed, QuestionStore};
use crate::error::{Error, Result};
use crate::search;
use crate::types::{Category, CategoryId, NewQuestion, Question, QuestionId};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Inner {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: QuestionId,
}

/// Question store backed by plain vectors
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given categories and no questions
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                categories,
                questions: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store holding the stock categories and questions
    pub fn seeded() -> Result<Self> {
        let store = Self::with_categories(seed::default_categories());
        for question in seed::default_questions() {
            store.insert(question)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| Error::database("memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| Error::database("memory store lock poisoned"))
    }
}

impl QuestionStore for MemoryStore {
    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }

    fn questions(&self) -> Result<Vec<Question>> {
        Ok(self.read()?.questions.clone())
    }

    fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    fn search(&self, term: &str) -> Result<Vec<Question>> {
        let inner = self.read()?;
        Ok(search::filter(&inner.questions, term)
            .into_iter()
            .cloned()
            .collect())
    }

    fn question(&self, id: QuestionId) -> Result<Option<Question>> {
        Ok(self.read()?.questions.iter().find(|q| q.id == id).cloned())
    }

    fn insert(&self, question: NewQuestion) -> Result<Question> {
        question.validate()?;

        let mut inner = self.write()?;
        if !inner.categories.iter().any(|c| c.id == question.category) {
            return Err(Error::validation(format!(
                "category {} does not exist",
                question.category
            )));
        }

        let id = inner.next_id.max(1);
        inner.next_id = id + 1;
        let stored = question.into_question(id);
        inner.questions.push(stored.clone());
        Ok(stored)
    }

    fn delete(&self, id: QuestionId) -> Result<bool> {
        let mut inner = self.write()?;
        let before = inner.questions.len();
        inner.questions.retain(|q| q.id != id);
        Ok(inner.questions.len() != before)
    }

    fn category_exists(&self, category: CategoryId) -> Result<bool> {
        Ok(self.read()?.categories.iter().any(|c| c.id == category))
    }
}
