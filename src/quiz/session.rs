//! Multi-round quiz session
//!
//! The selector serves one round per call. A session carries the running
//! exclusion set between rounds, counts the score, and stops after an
//! optional number of rounds or once the pool runs dry.

use super::selector::next_question_with_rng;
use super::types::{ExclusionSet, QuizItem, QuizRequest};
use crate::error::{Error, Result};
use crate::types::{CategoryId, QuestionId};
use rand::Rng;

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Nothing served yet
    AwaitingFirstQuestion,
    /// A question is out and waits for an answer
    QuestionServed(QuestionId),
    /// Last answer recorded, ready for another round
    AwaitingNextQuestion,
    /// No more rounds: pool exhausted or round limit reached
    Exhausted,
}

/// State for one player's quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    category: Option<CategoryId>,
    previous: Vec<QuestionId>,
    excluded: ExclusionSet,
    max_rounds: Option<usize>,
    score: usize,
    state: QuizState,
}

impl QuizSession {
    /// Start a session, optionally restricted to one category
    pub fn new(category: Option<CategoryId>) -> Self {
        Self {
            category,
            previous: Vec::new(),
            excluded: ExclusionSet::new(),
            max_rounds: None,
            score: 0,
            state: QuizState::AwaitingFirstQuestion,
        }
    }

    /// Stop after `rounds` answered questions
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        if rounds == 0 {
            self.state = QuizState::Exhausted;
        }
        self
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Questions answered so far, in the order they were served
    pub fn previous_questions(&self) -> &[QuestionId] {
        &self.previous
    }

    pub fn rounds_played(&self) -> usize {
        self.previous.len()
    }

    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Exhausted
    }

    /// Request body for the next round against the HTTP API
    pub fn to_request(&self) -> QuizRequest {
        QuizRequest::new(self.previous.clone(), self.category)
    }

    /// Serve the next question from `pool`
    pub fn next_question<'a, T: QuizItem>(&mut self, pool: &'a [T]) -> Result<Option<&'a T>> {
        self.next_question_with_rng(pool, &mut rand::rng())
    }

    /// Serve the next question using the given RNG
    pub fn next_question_with_rng<'a, T, R>(
        &mut self,
        pool: &'a [T],
        rng: &mut R,
    ) -> Result<Option<&'a T>>
    where
        T: QuizItem,
        R: Rng + ?Sized,
    {
        match self.state {
            QuizState::Exhausted => return Ok(None),
            QuizState::QuestionServed(id) => {
                return Err(Error::bad_request(format!(
                    "question {id} has not been answered yet"
                )));
            }
            QuizState::AwaitingFirstQuestion | QuizState::AwaitingNextQuestion => {}
        }

        match next_question_with_rng(pool, &self.excluded, self.category, rng) {
            Some(item) => {
                self.state = QuizState::QuestionServed(item.item_id());
                Ok(Some(item))
            }
            None => {
                self.state = QuizState::Exhausted;
                Ok(None)
            }
        }
    }

    /// Record the answer to the served question
    pub fn submit_answer(&mut self, correct: bool) -> Result<()> {
        let QuizState::QuestionServed(id) = self.state else {
            return Err(Error::bad_request("no question is waiting for an answer"));
        };

        self.previous.push(id);
        self.excluded.insert(id);
        if correct {
            self.score += 1;
        }

        self.state = if self
            .max_rounds
            .is_some_and(|max| self.previous.len() >= max)
        {
            QuizState::Exhausted
        } else {
            QuizState::AwaitingNextQuestion
        };
        Ok(())
    }
}
