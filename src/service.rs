//! Request-level trivia operations
//!
//! [`TriviaService`] joins the injected [`QuestionStore`] with the pure
//! pagination, search and quiz logic, and shapes the results the way the
//! HTTP layer serializes them.

use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::pagination::{Page, PageNumber, Paginator};
use crate::quiz::{self, QuizRequest};
use crate::search;
use crate::store::QuestionStore;
use crate::types::{Category, CategoryId, NewQuestion, Question, QuestionId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Category id → display name
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// Categories listing
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesView {
    pub categories: CategoryMap,
}

/// One page of questions
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsView {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<CategoryId>,
}

impl QuestionsView {
    fn from_page(page: Page<Question>) -> Self {
        Self {
            current_category: page.first().map(|q| q.category),
            total_questions: page.total,
            questions: page.items,
            categories: None,
        }
    }
}

/// Result of creating a question
#[derive(Debug, Clone, Serialize)]
pub struct CreatedView {
    pub created: QuestionId,
    pub total_questions: usize,
}

/// Result of deleting a question
#[derive(Debug, Clone, Serialize)]
pub struct DeletedView {
    pub deleted: QuestionId,
}

/// Result of a quiz round
#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    pub question: Option<Question>,
}

/// Trivia operations over an injected store
#[derive(Clone)]
pub struct TriviaService {
    store: Arc<dyn QuestionStore>,
    paginator: Paginator,
}

impl TriviaService {
    pub fn new(store: Arc<dyn QuestionStore>, paginator: Paginator) -> Self {
        Self { store, paginator }
    }

    pub fn store(&self) -> &Arc<dyn QuestionStore> {
        &self.store
    }

    pub fn paginator(&self) -> Paginator {
        self.paginator
    }

    fn category_map(&self) -> Result<CategoryMap> {
        Ok(self
            .store
            .categories()?
            .into_iter()
            .map(|Category { id, kind }| (id, kind))
            .collect())
    }

    /// All categories
    pub fn categories(&self) -> Result<CategoriesView> {
        Ok(CategoriesView {
            categories: self.category_map()?,
        })
    }

    /// One page of all questions, with the category map
    pub fn questions(&self, page: PageNumber) -> Result<QuestionsView> {
        let all = self.store.questions()?;
        let mut view = QuestionsView::from_page(self.paginator.page(&all, page));
        view.categories = Some(self.category_map()?);
        tracing::debug!(page = page.get(), total = view.total_questions, "listed questions");
        Ok(view)
    }

    /// One page of the questions in `category`
    pub fn questions_for_category(
        &self,
        category: CategoryId,
        page: PageNumber,
    ) -> Result<QuestionsView> {
        let matching = self.store.questions_in_category(category)?;
        Ok(QuestionsView::from_page(self.paginator.page(&matching, page)))
    }

    /// One page of the questions matching `term`
    pub fn search(&self, term: &str, page: PageNumber) -> Result<QuestionsView> {
        let term = search::normalize_term(term)
            .ok_or_else(|| Error::validation("search term must not be empty"))?;
        let hits = self.store.search(term)?;
        tracing::debug!(term, hits = hits.len(), "searched questions");
        Ok(QuestionsView::from_page(self.paginator.page(&hits, page)))
    }

    /// Store a new question
    pub fn create(&self, question: NewQuestion) -> Result<CreatedView> {
        let stored = self.store.insert(question)?;
        tracing::info!(id = stored.id, category = stored.category, "created question");
        Ok(CreatedView {
            created: stored.id,
            total_questions: self.store.questions()?.len(),
        })
    }

    /// Delete a question; unknown ids are a client error
    pub fn delete(&self, id: QuestionId) -> Result<DeletedView> {
        if !self.store.delete(id)? {
            return Err(Error::QuestionNotFound { id });
        }
        tracing::info!(id, "deleted question");
        Ok(DeletedView { deleted: id })
    }

    /// Serve one quiz round
    pub fn quiz(&self, request: &QuizRequest) -> Outcome<Question> {
        let category = request.category_filter();
        let pool = match self.store.quiz_pool(category) {
            Ok(pool) => pool,
            Err(e) => return Outcome::Fault(e),
        };

        let excluded = request.exclusion_set();
        let outcome: Outcome<Question> = quiz::next_question(&pool, &excluded, category)
            .cloned()
            .into();
        if outcome.is_empty() {
            tracing::debug!(?category, asked = excluded.len(), "quiz exhausted");
        }
        outcome
    }
}
