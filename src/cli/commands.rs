//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trivia API server and command-line client
#[derive(Parser, Debug)]
#[command(name = "trivia-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// DuckDB database file (in-memory when omitted)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List categories
    Categories,

    /// List one page of questions
    Questions {
        /// Page number (1-based)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Only questions in this category
        #[arg(long, conflicts_with = "search")]
        category: Option<i64>,

        /// Only questions containing this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Draw one quiz question
    Quiz {
        /// Restrict to a category (0 = all)
        #[arg(long)]
        category: Option<i64>,

        /// Question ids already asked (comma-separated)
        #[arg(long, value_delimiter = ',')]
        previous: Vec<i64>,
    },

    /// Play an interactive quiz on the terminal
    Play {
        /// Restrict to a category (0 = all)
        #[arg(long)]
        category: Option<i64>,

        /// Number of questions (defaults to the configured rounds)
        #[arg(long)]
        rounds: Option<usize>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}
