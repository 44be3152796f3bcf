//! CLI runner - executes commands

use crate::auth::TokenVerifier;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{self, AppState};
use crate::config::AppConfig;
use crate::database::DatabaseStore;
use crate::error::{Result, ResultExt};
use crate::outcome::Outcome;
use crate::pagination::{PageNumber, Paginator};
use crate::quiz::{QuizRequest, QuizSession};
use crate::service::TriviaService;
use crate::store::QuestionStore;
use serde::Serialize;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Serve { host, port } => {
                let host = host.clone().unwrap_or_else(|| config.server.host.clone());
                let port = port.unwrap_or(config.server.port);
                let state = AppState::new(
                    self.build_service(&config)?,
                    TokenVerifier::from_config(&config.auth),
                );
                if !config.auth.is_enabled() {
                    tracing::warn!("No auth secret configured; mutating endpoints are open");
                }
                server::serve(state, &host, port).await
            }
            Commands::Categories => {
                let service = self.build_service(&config)?;
                self.emit(&service.categories()?)
            }
            Commands::Questions {
                page,
                category,
                search,
            } => {
                let service = self.build_service(&config)?;
                let page = PageNumber::clamped(*page);
                let view = match (category, search.as_deref()) {
                    (Some(id), _) => service.questions_for_category(*id, page)?,
                    (None, Some(term)) => service.search(term, page)?,
                    (None, None) => service.questions(page)?,
                };
                self.emit(&view)
            }
            Commands::Quiz { category, previous } => {
                let service = self.build_service(&config)?;
                let request = QuizRequest::new(previous.clone(), *category);
                match service.quiz(&request) {
                    Outcome::Found(question) => self.emit(&json!({ "question": question })),
                    Outcome::Empty => self.emit(&json!({ "question": null })),
                    Outcome::Fault(e) => Err(e),
                }
            }
            Commands::Play { category, rounds } => {
                let service = self.build_service(&config)?;
                let rounds = rounds.unwrap_or(config.quiz.rounds);
                let stdin = io::stdin();
                let stdout = io::stdout();
                play(
                    service.store().as_ref(),
                    *category,
                    rounds,
                    stdin.lock(),
                    stdout.lock(),
                )
                .map(|_| ())
            }
        }
    }

    /// Load config from file and environment, then apply CLI overrides
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.cli.config.as_deref())?;
        if let Some(path) = &self.cli.database {
            config.database.path = Some(path.clone());
        }
        Ok(config)
    }

    /// Open the configured store and wrap it in a service
    fn build_service(&self, config: &AppConfig) -> Result<TriviaService> {
        let store = DatabaseStore::open(config.database.path.as_deref())
            .context("Failed to open question store")?;
        if config.database.seed {
            store
                .seed_if_empty()
                .with_context(|| format!("Failed to seed question store at {}", store.location()))?;
        }
        tracing::debug!(location = store.location(), "question store ready");

        Ok(TriviaService::new(
            Arc::new(store),
            Paginator::new(config.page_size()?),
        ))
    }

    /// Print a result in the selected format
    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}

/// Run an interactive quiz over `input`/`output`.
///
/// Returns the final score. Stops early when `input` is closed.
pub fn play<R, W>(
    store: &dyn QuestionStore,
    category: Option<i64>,
    rounds: usize,
    mut input: R,
    mut output: W,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let request = QuizRequest::new(Vec::new(), category);
    let pool = store.quiz_pool(request.category_filter())?;
    let mut session = QuizSession::new(request.category_filter()).with_max_rounds(rounds);

    while let Some(question) = session.next_question(&pool)? {
        writeln!(
            output,
            "\nQuestion {}: {}",
            session.rounds_played() + 1,
            question.question
        )?;
        write!(output, "> ")?;
        output.flush()?;

        let mut guess = String::new();
        if input.read_line(&mut guess)? == 0 {
            break;
        }

        let correct = question.check_answer(&guess);
        if correct {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(output, "Incorrect. The answer was: {}", question.answer)?;
        }
        session.submit_answer(correct)?;
    }

    if session.rounds_played() == 0 && session.is_finished() {
        writeln!(output, "No questions available.")?;
    } else {
        writeln!(
            output,
            "\nScore: {}/{}",
            session.score(),
            session.rounds_played()
        )?;
    }
    Ok(session.score())
}
