//! Page window and paginated-response envelope

use serde::{Deserialize, Serialize};

/// A contiguous slice of the sorted, filtered result set
///
/// Fields are signed so that malformed client input survives untouched to
/// the store boundary, which rejects negative pages and non-positive sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: i64,

    /// Page size
    pub size: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }
}

/// Uniform paginated-response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: u64,
    pub total_pages: i64,
    pub current_page: i64,
    pub page_size: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Wrap one page of items with metadata derived from the total match
    /// count and the requested window.
    pub fn new(items: Vec<T>, total_elements: u64, page: i64, size: i64) -> Self {
        let total_pages = if size > 0 {
            (total_elements as i64 + size - 1) / size
        } else {
            0
        };

        Self {
            items,
            total_elements,
            total_pages,
            current_page: page,
            page_size: size,
            has_next: page + 1 < total_pages,
            has_previous: page > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page: Page<u8> = Page::new(vec![], 43, 0, 20);
        assert_eq!(page.total_pages, 3);

        let exact: Page<u8> = Page::new(vec![], 40, 0, 20);
        assert_eq!(exact.total_pages, 2);

        let empty: Page<u8> = Page::new(vec![], 0, 0, 10);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_single_page_has_no_neighbours() {
        let page: Page<u8> = Page::new(vec![1], 1, 0, 10);

        assert_eq!(page.total_elements, 1);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_last_page_of_three() {
        let page: Page<u8> = Page::new(vec![1, 2, 3], 43, 2, 20);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 2);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_middle_page_has_both_neighbours() {
        let page: Page<u8> = Page::new(vec![], 43, 1, 20);

        assert!(page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_envelope_serializes_camel_case() {
        let page: Page<u8> = Page::new(vec![7], 1, 0, 10);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["currentPage"], 0);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["hasPrevious"], false);
        assert_eq!(json["items"][0], 7);
    }
}
