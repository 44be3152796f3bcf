//! Pagination module
//!
//! # Overview
//!
//! Splits an ordered result set into fixed-size, 1-based pages. Requesting a
//! page past the end is not an error: it simply yields no items.
//!
//! ```
//! use trivia_api::pagination::{paginate, PageNumber, PageSize};
//!
//! let items: Vec<u32> = (1..=12).collect();
//! let size = PageSize::new(10).unwrap();
//! assert_eq!(paginate(&items, PageNumber::clamped(2), size), &[11, 12]);
//! assert!(paginate(&items, PageNumber::clamped(3), size).is_empty());
//! ```

mod paginator;
mod types;

pub use paginator::{paginate, Paginator};
pub use types::{Page, PageNumber, PageSize, QUESTIONS_PER_PAGE};

#[cfg(test)]
mod tests;
