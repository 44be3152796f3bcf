//! DuckDB-backed question store
//!
//! Holds a single DuckDB connection, either in-memory or on a database
//! file. Statements are serialized through a mutex because a DuckDB
//! connection must not be used from two threads at once.

use crate::error::{Error, Result};
use crate::store::{seed, QuestionStore};
use crate::types::{Category, CategoryId, NewQuestion, Question, QuestionId};
use duckdb::{params, Connection, Row, ToSql};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const SCHEMA: &str = "
    CREATE SEQUENCE IF NOT EXISTS question_id_seq START 1;
    CREATE TABLE IF NOT EXISTS categories (
        id BIGINT PRIMARY KEY,
        \"type\" VARCHAR NOT NULL
    );
    CREATE TABLE IF NOT EXISTS questions (
        id BIGINT PRIMARY KEY DEFAULT nextval('question_id_seq'),
        question VARCHAR NOT NULL,
        answer VARCHAR NOT NULL,
        category BIGINT NOT NULL,
        difficulty INTEGER NOT NULL
    );
";

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Question store using DuckDB
pub struct DatabaseStore {
    /// DuckDB connection
    conn: Mutex<Connection>,
    /// Database location (for logging)
    location: String,
}

impl DatabaseStore {
    /// Open a store on a database file, or in memory when `path` is `None`
    /// or `:memory:`
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let (conn, location) = match path {
            Some(p) if p.as_os_str() != ":memory:" => {
                let conn = Connection::open(p).map_err(|e| {
                    Error::database(format!("Failed to open database '{}': {e}", p.display()))
                })?;
                (conn, p.display().to_string())
            }
            _ => {
                let conn = Connection::open_in_memory().map_err(|e| {
                    Error::database(format!("Failed to create DuckDB connection: {e}"))
                })?;
                (conn, ":memory:".to_string())
            }
        };

        let store = Self {
            conn: Mutex::new(conn),
            location,
        };
        store.init_schema()?;

        tracing::debug!(location = %store.location, "opened question database");
        Ok(store)
    }

    /// Open an in-memory store
    pub fn open_in_memory() -> Result<Self> {
        Self::open(None)
    }

    /// Create tables and sequences if they are missing
    fn init_schema(&self) -> Result<()> {
        self.lock()?
            .execute_batch(SCHEMA)
            .map_err(|e| Error::database(format!("Failed to create schema: {e}")))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::database("database connection lock poisoned"))
    }

    /// Load the stock categories and questions if no categories exist yet.
    ///
    /// Returns the number of questions inserted.
    pub fn seed_if_empty(&self) -> Result<usize> {
        let existing: i64 = self
            .lock()?
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
            .map_err(|e| Error::database(format!("Failed to count categories: {e}")))?;
        if existing > 0 {
            return Ok(0);
        }

        for category in seed::default_categories() {
            self.insert_category(&category)?;
        }

        let questions = seed::default_questions();
        let count = questions.len();
        for question in questions {
            self.insert(question)?;
        }

        tracing::info!(questions = count, location = %self.location, "seeded question database");
        Ok(count)
    }

    /// Add a category
    pub fn insert_category(&self, category: &Category) -> Result<()> {
        self.lock()?
            .execute(
                "INSERT INTO categories (id, \"type\") VALUES (?, ?)",
                params![category.id, category.kind],
            )
            .map_err(|e| Error::database(format!("Failed to insert category: {e}")))?;
        Ok(())
    }

    /// Test database connection
    pub fn check_connection(&self) -> Result<()> {
        self.lock()?
            .execute_batch("SELECT 1")
            .map_err(|e| Error::database(format!("Connection check failed: {e}")))
    }

    /// Database location, for logging
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Run a query selecting `QUESTION_COLUMNS`
    fn query_questions(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Question>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| Error::database(format!("Failed to prepare query: {e}")))?;

        let questions = stmt
            .query_map(params, question_from_row)
            .map_err(|e| Error::database(format!("Failed to query questions: {e}")))?
            .collect::<duckdb::Result<Vec<_>>>()
            .map_err(|e| Error::database(format!("Failed to read question row: {e}")))?;

        Ok(questions)
    }
}

impl QuestionStore for DatabaseStore {
    fn categories(&self) -> Result<Vec<Category>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT id, \"type\" FROM categories ORDER BY id")
            .map_err(|e| Error::database(format!("Failed to prepare query: {e}")))?;

        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    kind: row.get(1)?,
                })
            })
            .map_err(|e| Error::database(format!("Failed to query categories: {e}")))?
            .collect::<duckdb::Result<Vec<_>>>()
            .map_err(|e| Error::database(format!("Failed to read category row: {e}")))?;

        Ok(categories)
    }

    fn questions(&self) -> Result<Vec<Question>> {
        self.query_questions(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"),
            &[],
        )
    }

    fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>> {
        self.query_questions(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id"),
            &[&category],
        )
    }

    fn search(&self, term: &str) -> Result<Vec<Question>> {
        // contains() matches literally, unlike ILIKE's % and _ wildcards
        self.query_questions(
            &format!(
                "SELECT {QUESTION_COLUMNS} FROM questions \
                 WHERE contains(lower(question), lower(?)) ORDER BY id"
            ),
            &[&term],
        )
    }

    fn question(&self, id: QuestionId) -> Result<Option<Question>> {
        let mut found = self.query_questions(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?"),
            &[&id],
        )?;
        Ok(found.pop())
    }

    fn insert(&self, question: NewQuestion) -> Result<Question> {
        question.validate()?;
        if !self.category_exists(question.category)? {
            return Err(Error::validation(format!(
                "category {} does not exist",
                question.category
            )));
        }

        let conn = self.lock()?;
        let id: QuestionId = conn
            .query_row(
                "INSERT INTO questions (question, answer, category, difficulty) \
                 VALUES (?, ?, ?, ?) RETURNING id",
                params![
                    question.question.trim(),
                    question.answer.trim(),
                    question.category,
                    question.difficulty
                ],
                |row| row.get(0),
            )
            .map_err(|e| Error::database(format!("Failed to insert question: {e}")))?;

        Ok(question.into_question(id))
    }

    fn delete(&self, id: QuestionId) -> Result<bool> {
        let affected = self
            .lock()?
            .execute("DELETE FROM questions WHERE id = ?", params![id])
            .map_err(|e| Error::database(format!("Failed to delete question {id}: {e}")))?;
        Ok(affected > 0)
    }

    fn category_exists(&self, category: CategoryId) -> Result<bool> {
        let count: i64 = self
            .lock()?
            .query_row(
                "SELECT COUNT(*) FROM categories WHERE id = ?",
                params![category],
                |row| row.get(0),
            )
            .map_err(|e| Error::database(format!("Failed to look up category: {e}")))?;
        Ok(count > 0)
    }
}

fn question_from_row(row: &Row<'_>) -> duckdb::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}
