/// Reference page size for discovery results.
pub const PAGE_SIZE: usize = 6;

/// One page of a ranked result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Slice `items` into fixed-size pages and return the 1-based page
/// `page_index`. A page past the end is empty, not an error; a zero
/// page size holds nothing and yields zero pages.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_index: usize) -> Page<T> {
    if page_size == 0 {
        return Page { items: Vec::new(), total_pages: 0 };
    }

    let total_pages = items.len().div_ceil(page_size);

    let start = page_index.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    let items = if start < items.len() { items[start..end].to_vec() } else { Vec::new() };

    Page { items, total_pages }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_of_len_over_size() {
        let items: Vec<u32> = (0..13).collect();
        assert_eq!(paginate(&items, 6, 1).total_pages, 3);
        assert_eq!(paginate(&items[..12], 6, 1).total_pages, 2);
        assert_eq!(paginate(&items[..1], 6, 1).total_pages, 1);
    }

    #[test]
    fn empty_input_has_zero_pages() {
        let page = paginate::<u32>(&[], PAGE_SIZE, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn pages_slice_in_order() {
        let items: Vec<u32> = (0..13).collect();
        assert_eq!(paginate(&items, 6, 1).items, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 6, 2).items, vec![6, 7, 8, 9, 10, 11]);
        assert_eq!(paginate(&items, 6, 3).items, vec![12]);
    }

    #[test]
    fn zero_page_size_yields_no_pages() {
        let items: Vec<u32> = (0..13).collect();
        let page = paginate(&items, 0, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..13).collect();
        let page = paginate(&items, 6, 4);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
    }
}
