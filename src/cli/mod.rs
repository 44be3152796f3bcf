//! CLI module
//!
//! Command-line interface for the trivia API.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP API server
//! - `categories` - List categories
//! - `questions` - List, filter or search questions one page at a time
//! - `quiz` - Draw a single quiz question
//! - `play` - Play an interactive quiz on the terminal

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{play, Runner};
pub use server::{router, serve, AppState};
