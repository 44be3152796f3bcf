//! Page slicing over ordered collections

use super::types::{Page, PageNumber, PageSize};

/// Slice out one page of `items`.
///
/// Out-of-range pages yield an empty slice; a final partial page is
/// returned as-is.
pub fn paginate<T>(items: &[T], page: PageNumber, size: PageSize) -> &[T] {
    let start = (page.get() - 1).saturating_mul(size.get());
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size.get()).min(items.len());
    &items[start..end]
}

/// Slices collections into pages of a fixed size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paginator {
    size: PageSize,
}

impl Paginator {
    pub fn new(size: PageSize) -> Self {
        Self { size }
    }

    pub fn page_size(&self) -> PageSize {
        self.size
    }

    /// Build an owned page from `items`
    pub fn page<T: Clone>(&self, items: &[T], page: PageNumber) -> Page<T> {
        Page {
            items: paginate(items, page, self.size).to_vec(),
            page: page.get(),
            page_size: self.size.get(),
            total: items.len(),
        }
    }

    /// Number of pages needed for `len` items
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.size.get())
    }
}
