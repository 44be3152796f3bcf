//! Persistent question storage via DuckDB
//!
//! The database can live in memory (the default, seeded on startup) or in a
//! DuckDB file that survives restarts.

mod engine;

pub use engine::DatabaseStore;
