//! Page arithmetic for the blog listing.
//!
//! The `pages` array is a sliding window of links centered on the
//! current page, clamped to `[1, page_count]`.

use serde::Serialize;

/// Width of the page-link window
pub const PAGE_WINDOW: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: i64,
    pub url: String,
}

/// Page number from the query, floored at 1
pub fn normalize_page(requested: Option<i64>) -> i64 {
    requested.unwrap_or(1).max(1)
}

/// Page size from the query, clamped to `[1, max]`
pub fn clamp_limit(requested: Option<i64>, default: i64, max: i64) -> i64 {
    requested.unwrap_or(default).clamp(1, max)
}

/// Row offset for a page. The page number comes straight off the
/// query string, so the arithmetic saturates instead of overflowing.
pub fn offset(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Total number of pages for `item_count` items
pub fn page_count(item_count: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (item_count + limit - 1) / limit
}

pub fn has_next_page(current_page: i64, page_count: i64) -> bool {
    current_page < page_count
}

/// Links for up to [`PAGE_WINDOW`] pages around the current one.
///
/// The window slides right with the current page, stops sliding at the
/// last page, and never starts before page 1. An empty collection has
/// no links at all.
pub fn page_links(page_count: i64, current_page: i64, limit: i64) -> Vec<PageLink> {
    if page_count <= 0 {
        return Vec::new();
    }

    let end = (current_page + PAGE_WINDOW / 2)
        .max(PAGE_WINDOW)
        .min(page_count);
    let start = (end - PAGE_WINDOW + 1).max(1);

    (start..=end)
        .map(|number| PageLink {
            number,
            url: format!("/api/blogs?page={number}&limit={limit}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(links: &[PageLink]) -> Vec<i64> {
        links.iter().map(|l| l.number).collect()
    }

    #[test]
    fn test_normalize_page() {
        assert_eq!(normalize_page(None), 1);
        assert_eq!(normalize_page(Some(0)), 1);
        assert_eq!(normalize_page(Some(-5)), 1);
        assert_eq!(normalize_page(Some(7)), 7);
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None, 10, 50), 10);
        assert_eq!(clamp_limit(Some(25), 10, 50), 25);
        assert_eq!(clamp_limit(Some(500), 10, 50), 50);
        assert_eq!(clamp_limit(Some(0), 10, 50), 1);
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(3, 10), 20);
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        assert_eq!(offset(i64::MAX, 10), i64::MAX);
        assert_eq!(offset(i64::MAX, 1), i64::MAX - 1);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 10), 10);
    }

    #[test]
    fn test_has_next_page() {
        assert!(has_next_page(1, 2));
        assert!(!has_next_page(2, 2));
        assert!(!has_next_page(1, 0));
    }

    #[test]
    fn test_page_links_empty_collection() {
        assert!(page_links(0, 1, 10).is_empty());
    }

    #[test]
    fn test_page_links_window_at_start() {
        // Fewer pages than the window: show them all
        assert_eq!(numbers(&page_links(2, 1, 10)), vec![1, 2]);
        // Window anchored at the left edge
        assert_eq!(numbers(&page_links(10, 1, 10)), vec![1, 2, 3]);
        assert_eq!(numbers(&page_links(10, 2, 10)), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_links_window_slides_with_current() {
        assert_eq!(numbers(&page_links(10, 5, 10)), vec![4, 5, 6]);
        assert_eq!(numbers(&page_links(10, 6, 10)), vec![5, 6, 7]);
    }

    #[test]
    fn test_page_links_window_at_end() {
        assert_eq!(numbers(&page_links(10, 10, 10)), vec![8, 9, 10]);
        assert_eq!(numbers(&page_links(10, 9, 10)), vec![8, 9, 10]);
    }

    #[test]
    fn test_page_links_urls_carry_limit() {
        let links = page_links(3, 2, 25);
        assert_eq!(links[0].url, "/api/blogs?page=1&limit=25");
        assert_eq!(links[2].url, "/api/blogs?page=3&limit=25");
    }
}
