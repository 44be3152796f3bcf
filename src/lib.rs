// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Trivia API
//!
//! A trivia question bank served over HTTP: paginated question listings,
//! category filtering, substring search, question management and a
//! quiz mode that never repeats a question within one game.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use trivia_api::cli::{serve, AppState};
//! use trivia_api::pagination::Paginator;
//! use trivia_api::service::TriviaService;
//! use trivia_api::store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> trivia_api::Result<()> {
//!     let store = MemoryStore::seeded()?;
//!     let service = TriviaService::new(Arc::new(store), Paginator::default());
//!     serve(AppState::new(service, None), "127.0.0.1", 8080).await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 HTTP layer (axum) / CLI (clap)                  │
//! │  routing, body parsing, auth, status codes, JSON envelopes      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         TriviaService                           │
//! │  categories · questions · search · create · delete · quiz       │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬────────────┬────┴─────────┬──────────────────────┐
//! │ Pagination │   Search   │     Quiz     │   QuestionStore      │
//! ├────────────┼────────────┼──────────────┼──────────────────────┤
//! │ PageNumber │ normalize  │ eligible     │ MemoryStore          │
//! │ PageSize   │ matches    │ next_question│ DatabaseStore(DuckDB)│
//! │ Paginator  │ filter     │ QuizSession  │ seed data            │
//! └────────────┴────────────┴──────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the trivia API
pub mod error;

/// Core domain types
pub mod types;

/// Found / empty / fault results
pub mod outcome;

/// Page arithmetic
pub mod pagination;

/// Substring search
pub mod search;

/// Quiz question selection and sessions
pub mod quiz;

/// Question storage trait and in-memory store
pub mod store;

/// DuckDB-backed question store
pub mod database;

/// Bearer-token authorization
pub mod auth;

/// Application configuration
pub mod config;

/// Use-case layer shared by the HTTP server and the CLI
pub mod service;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use outcome::Outcome;
pub use service::TriviaService;
pub use store::{MemoryStore, QuestionStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
