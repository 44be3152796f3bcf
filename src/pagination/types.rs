//! Pagination types
//!
//! Page numbers are 1-based and clamped; page sizes are validated once at
//! startup and never change afterwards.

use crate::error::{Error, Result};
use serde::Serialize;
use std::num::{IntErrorKind, NonZeroUsize};

/// Number of questions shown per page unless configured otherwise
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    /// The largest representable page; always past the end of any collection
    pub const LAST: PageNumber = PageNumber(NonZeroUsize::MAX);

    /// Build a page number, clamping anything below 1 up to 1.
    ///
    /// Values too large for `usize` saturate to [`PageNumber::LAST`].
    pub fn clamped(raw: i64) -> Self {
        if raw < 1 {
            return Self::FIRST;
        }
        usize::try_from(raw)
            .ok()
            .and_then(NonZeroUsize::new)
            .map_or(Self::LAST, Self)
    }

    /// Parse the `page` query parameter.
    ///
    /// Absent or non-integer values fall back to the first page. Integers
    /// too large to represent saturate to [`PageNumber::LAST`].
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::FIRST;
        };
        match raw.trim().parse::<i64>() {
            Ok(n) => Self::clamped(n),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Self::LAST,
            Err(_) => Self::FIRST,
        }
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The page after this one
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// A positive page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Validate a page size; zero is a configuration error
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| Error::invalid_value("page_size", "page size must be positive"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        // QUESTIONS_PER_PAGE is non-zero
        Self(NonZeroUsize::new(QUESTIONS_PER_PAGE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

/// One page of a larger ordered collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page (possibly empty)
    pub items: Vec<T>,
    /// Page number that was requested
    pub page: usize,
    /// Page size in effect
    pub page_size: usize,
    /// Size of the whole collection
    pub total: usize,
}

impl<T> Page<T> {
    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether pages exist after this one
    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.page_size) < self.total
    }

    /// Number of pages the whole collection spans
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// First item on the page
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }
}
