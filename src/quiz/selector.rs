//! Uniform random selection of the next quiz question

use super::types::{ExclusionSet, QuizItem};
use crate::types::CategoryId;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Items of `pool` that are neither excluded nor outside `category`
pub fn eligible<'a, T: QuizItem>(
    pool: &'a [T],
    excluded: &ExclusionSet,
    category: Option<CategoryId>,
) -> Vec<&'a T> {
    pool.iter()
        .filter(|item| !excluded.contains(&item.item_id()))
        .filter(|item| category.map_or(true, |c| item.category_id() == c))
        .collect()
}

/// Pick the next question using the thread-local RNG.
///
/// Returns `None` once nothing eligible remains.
pub fn next_question<'a, T: QuizItem>(
    pool: &'a [T],
    excluded: &ExclusionSet,
    category: Option<CategoryId>,
) -> Option<&'a T> {
    next_question_with_rng(pool, excluded, category, &mut rand::rng())
}

/// Pick the next question with a caller-supplied RNG
pub fn next_question_with_rng<'a, T, R>(
    pool: &'a [T],
    excluded: &ExclusionSet,
    category: Option<CategoryId>,
    rng: &mut R,
) -> Option<&'a T>
where
    T: QuizItem,
    R: Rng + ?Sized,
{
    let candidates = eligible(pool, excluded, category);
    let picked = candidates.choose(rng).copied();
    tracing::debug!(
        eligible = candidates.len(),
        picked = ?picked.map(|item| item.item_id()),
        "quiz selection"
    );
    picked
}
