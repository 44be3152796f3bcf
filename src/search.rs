//! Case-insensitive substring search over question text

use crate::types::Question;

/// Normalize a raw search term; blank terms mean "no search"
pub fn normalize_term(term: &str) -> Option<&str> {
    let term = term.trim();
    (!term.is_empty()).then_some(term)
}

/// Whether `text` contains `term`, ignoring case.
///
/// The term is matched literally: `%` and `_` carry no wildcard meaning.
pub fn matches(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Questions whose text contains `term`, in pool order
pub fn filter<'a>(questions: &'a [Question], term: &str) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| matches(&q.question, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, text: &str) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: "a".to_string(),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn test_matches_ignores_case() {
        assert!(matches("What boxer's original name is Cassius Clay?", "clay"));
        assert!(matches("What boxer's original name is Cassius Clay?", "CASSIUS"));
        assert!(!matches("Who invented Peanut Butter?", "jelly"));
    }

    #[test]
    fn test_matches_is_literal() {
        assert!(!matches("100 percent", "100%"));
        assert!(matches("100% sure", "100%"));
        assert!(!matches("abc", "a_c"));
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  title "), Some("title"));
        assert_eq!(normalize_term("   "), None);
        assert_eq!(normalize_term(""), None);
    }

    #[test]
    fn test_filter_preserves_order() {
        let pool = vec![
            question(1, "What is the largest lake in Africa?"),
            question(2, "Who discovered penicillin?"),
            question(3, "Which is the only team to play in every soccer World Cup tournament?"),
            question(4, "In which royal palace would you find the Hall of Mirrors?"),
        ];

        let ids: Vec<i64> = filter(&pool, "IN").iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let ids: Vec<i64> = filter(&pool, "which").iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![3, 4]);

        assert!(filter(&pool, "xyz").is_empty());
    }
}
