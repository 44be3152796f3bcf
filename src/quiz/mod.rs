//! Quiz module
//!
//! Serves quiz questions one round at a time: each round picks uniformly at
//! random among the questions not yet asked, optionally within a single
//! category. Running out of questions is a normal end state, reported as
//! `None`.

mod selector;
mod session;
mod types;

pub use selector::{eligible, next_question, next_question_with_rng};
pub use session::{QuizSession, QuizState};
pub use types::{ExclusionSet, QuizCategory, QuizItem, QuizRequest, ALL_CATEGORIES};
