//! Pagination Layer
//!
//! Slices an ordered collection into fixed-size, 1-indexed pages.
//! An empty collection still has one page (the UI renders an empty-state
//! row); a page past the end is an empty slice, never an error.

/// Number of pages for `total` items at `page_size` per page.
///
/// Always at least 1, even when `total` is 0. A zero page size is treated
/// as a single page holding everything.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    std::cmp::max(1, total.div_ceil(page_size))
}

/// The slice `[(page-1)*size, page*size)` of `rows`.
///
/// `page` is 1-indexed; 0 is clamped to 1. Pages beyond the last valid page
/// yield an empty vector.
pub fn page_slice<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return rows.to_vec();
    }

    let page = std::cmp::max(1, page);
    let start = (page - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return Vec::new();
    }

    let end = std::cmp::min(start + page_size, rows.len());
    rows[start..end].to_vec()
}

/// Clamp a requested page to the valid range for display purposes.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    std::cmp::max(1, page).min(page_count(total, page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_is_max_one_ceil() {
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(1, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(47, 20), 3);
        assert_eq!(page_count(100, 7), 15);
    }

    #[test]
    fn test_47_records_page_size_20() {
        let rows: Vec<u32> = (0..47).collect();

        assert_eq!(page_slice(&rows, 1, 20).len(), 20);
        assert_eq!(page_slice(&rows, 2, 20).len(), 20);
        assert_eq!(page_slice(&rows, 3, 20).len(), 7);
        assert_eq!(page_count(rows.len(), 20), 3);
    }

    #[test]
    fn test_beyond_last_page_is_empty() {
        let rows: Vec<u32> = (0..10).collect();
        assert!(page_slice(&rows, 3, 5).is_empty());
        assert!(page_slice(&rows, 100, 5).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let rows: Vec<u32> = Vec::new();
        assert!(page_slice(&rows, 1, 20).is_empty());
        assert_eq!(page_count(0, 20), 1);
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let rows: Vec<u32> = (0..5).collect();
        assert_eq!(page_slice(&rows, 0, 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_slice_bounds() {
        let rows: Vec<u32> = (0..47).collect();
        let second = page_slice(&rows, 2, 20);
        assert_eq!(second.first(), Some(&20));
        assert_eq!(second.last(), Some(&39));
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(5, 47, 20), 3);
        assert_eq!(clamp_page(2, 47, 20), 2);
        assert_eq!(clamp_page(0, 47, 20), 1);
        assert_eq!(clamp_page(9, 0, 20), 1);
    }
}
