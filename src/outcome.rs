//! Tagged lookup results
//!
//! An empty result (no question left, nothing matched) is an expected,
//! frequent outcome and must never be reported the same way as a store
//! failure. [`Outcome`] keeps the three cases apart.

use crate::error::{Error, Result};

/// Result of a lookup that may legitimately find nothing
#[derive(Debug)]
pub enum Outcome<T> {
    /// A value was found
    Found(T),
    /// Nothing matched; not an error
    Empty,
    /// The lookup itself failed
    Fault(Error),
}

impl<T> Outcome<T> {
    /// Convert a fallible optional lookup
    pub fn from_result(result: Result<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => Self::Found(value),
            Ok(None) => Self::Empty,
            Err(e) => Self::Fault(e),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Map the found value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Found(value) => Outcome::Found(f(value)),
            Self::Empty => Outcome::Empty,
            Self::Fault(e) => Outcome::Fault(e),
        }
    }

    /// Collapse back into a `Result`, with `Empty` as `None`
    pub fn into_result(self) -> Result<Option<T>> {
        match self {
            Self::Found(value) => Ok(Some(value)),
            Self::Empty => Ok(None),
            Self::Fault(e) => Err(e),
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        assert!(Outcome::from_result(Ok(Some(1))).is_found());
        assert!(Outcome::<i32>::from_result(Ok(None)).is_empty());
        assert!(Outcome::<i32>::from_result(Err(Error::database("down"))).is_fault());
    }

    #[test]
    fn test_map_keeps_tag() {
        assert!(matches!(Outcome::Found(2).map(|v| v * 2), Outcome::Found(4)));
        assert!(Outcome::<i32>::Empty.map(|v| v * 2).is_empty());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::Found(3).into_result().unwrap(), Some(3));
        assert_eq!(Outcome::<i32>::Empty.into_result().unwrap(), None);
        assert!(Outcome::<i32>::Fault(Error::database("x"))
            .into_result()
            .is_err());
    }

    #[test]
    fn test_from_option() {
        assert!(Outcome::from(Some("x")).is_found());
        assert!(Outcome::<&str>::from(None).is_empty());
    }
}
