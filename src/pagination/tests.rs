//! Tests for pagination module

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn pool(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

fn size(n: usize) -> PageSize {
    PageSize::new(n).unwrap()
}

// ============================================================================
// PageNumber / PageSize Tests
// ============================================================================

#[test_case(1, 1 ; "first page")]
#[test_case(7, 7 ; "later page")]
#[test_case(0, 1 ; "zero clamps to first")]
#[test_case(-3, 1 ; "negative clamps to first")]
fn test_page_number_clamped(raw: i64, expected: usize) {
    assert_eq!(PageNumber::clamped(raw).get(), expected);
}

#[test_case(None, 1 ; "absent")]
#[test_case(Some("2"), 2 ; "integer")]
#[test_case(Some(" 4 "), 4 ; "padded integer")]
#[test_case(Some("abc"), 1 ; "non integer")]
#[test_case(Some("-1"), 1 ; "negative")]
#[test_case(Some("-99999999999999999999"), 1 ; "negative overflow")]
#[test_case(Some("99999999999999999999"), usize::MAX ; "positive overflow saturates")]
fn test_page_number_from_query(raw: Option<&str>, expected: usize) {
    assert_eq!(PageNumber::from_query(raw).get(), expected);
}

#[test]
fn test_clamped_max_is_past_the_end() {
    let page = PageNumber::clamped(i64::MAX);
    assert!(page.get() > 1);
    assert!(paginate(&pool(12), page, size(10)).is_empty());
}

#[test]
fn test_overflowing_query_page_is_empty() {
    let page = PageNumber::from_query(Some("99999999999999999999"));
    assert_eq!(page, PageNumber::LAST);
    assert!(paginate(&pool(12), page, size(10)).is_empty());
    assert!(Paginator::new(size(10)).page(&pool(12), page).is_empty());
}

#[test]
fn test_page_number_next() {
    assert_eq!(PageNumber::FIRST.next().get(), 2);
}

#[test]
fn test_page_size_rejects_zero() {
    let err = PageSize::new(0).unwrap_err();
    assert!(err.to_string().contains("page_size"));
    assert!(PageSize::try_from(0usize).is_err());
}

#[test]
fn test_page_size_default() {
    assert_eq!(PageSize::default().get(), QUESTIONS_PER_PAGE);
    assert_eq!(QUESTIONS_PER_PAGE, 10);
}

// ============================================================================
// paginate Tests
// ============================================================================

#[test]
fn test_twelve_items_page_size_ten() {
    let items = pool(12);
    let s = size(10);

    assert_eq!(paginate(&items, PageNumber::clamped(1), s), &pool(10)[..]);
    assert_eq!(paginate(&items, PageNumber::clamped(2), s), &[11, 12]);
    assert!(paginate(&items, PageNumber::clamped(3), s).is_empty());
}

#[test]
fn test_empty_pool() {
    let items: Vec<u32> = Vec::new();
    assert!(paginate(&items, PageNumber::FIRST, size(10)).is_empty());
}

#[test]
fn test_huge_page_number_is_empty() {
    let items = pool(5);
    let page = PageNumber::clamped(i64::MAX);
    assert!(paginate(&items, page, size(10)).is_empty());
}

#[test_case(0, 3)]
#[test_case(1, 3)]
#[test_case(9, 3)]
#[test_case(10, 10)]
#[test_case(23, 4)]
#[test_case(23, 1)]
fn test_page_bounds(len: u32, page_size: usize) {
    let items = pool(len);
    let s = size(page_size);
    for n in 1..=(len as usize + 2) {
        let page = paginate(&items, PageNumber::clamped(n as i64), s);
        assert!(page.len() <= page_size);
        if (n - 1) * page_size >= items.len() {
            assert!(page.is_empty());
        }
    }
}

#[test_case(0, 10)]
#[test_case(12, 10)]
#[test_case(30, 10)]
#[test_case(7, 2)]
fn test_pages_concatenate_to_pool(len: u32, page_size: usize) {
    let items = pool(len);
    let s = size(page_size);

    let mut rebuilt = Vec::new();
    let mut page = PageNumber::FIRST;
    loop {
        let slice = paginate(&items, page, s);
        if slice.is_empty() {
            break;
        }
        rebuilt.extend_from_slice(slice);
        page = page.next();
    }

    assert_eq!(rebuilt, items);
}

#[test]
fn test_repeated_calls_are_identical() {
    let items = pool(25);
    let s = size(10);
    let page = PageNumber::clamped(2);
    assert_eq!(paginate(&items, page, s), paginate(&items, page, s));
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[test]
fn test_paginator_page_metadata() {
    let paginator = Paginator::new(size(10));
    let page = paginator.page(&pool(12), PageNumber::clamped(2));

    assert_eq!(page.items, vec![11, 12]);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.total, 12);
    assert_eq!(page.total_pages(), 2);
    assert!(!page.has_next());
    assert_eq!(page.first(), Some(&11));
}

#[test]
fn test_paginator_out_of_range_page() {
    let paginator = Paginator::default();
    let page = paginator.page(&pool(12), PageNumber::clamped(5));

    assert!(page.is_empty());
    assert_eq!(page.total, 12);
    assert!(page.first().is_none());
}

#[test]
fn test_paginator_page_count() {
    let paginator = Paginator::new(size(10));
    assert_eq!(paginator.page_count(0), 0);
    assert_eq!(paginator.page_count(10), 1);
    assert_eq!(paginator.page_count(11), 2);
}

#[test]
fn test_paginator_has_next() {
    let paginator = Paginator::new(size(5));
    assert!(paginator.page(&pool(12), PageNumber::FIRST).has_next());
    assert!(!paginator.page(&pool(12), PageNumber::clamped(3)).has_next());
}
