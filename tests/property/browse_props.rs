//! Pagination invariants.

use proptest::prelude::*;
use satchel::browse::paginate;

proptest! {
    #[test]
    fn prop_page_is_in_range(len in 0usize..100, page in 0usize..20, per_page in 0usize..15) {
        let items: Vec<usize> = (0..len).collect();
        let p = paginate(&items, page, per_page);
        prop_assert!(p.total_pages >= 1);
        prop_assert!(p.number >= 1 && p.number <= p.total_pages);
        prop_assert!(p.items.len() <= p.per_page);
        prop_assert_eq!(p.total_items, len);
    }

    #[test]
    fn prop_pages_cover_items_once(len in 0usize..100, per_page in 1usize..15) {
        let items: Vec<usize> = (0..len).collect();
        let total_pages = paginate(&items, 1, per_page).total_pages;
        let mut seen = Vec::new();
        for n in 1..=total_pages {
            seen.extend_from_slice(paginate(&items, n, per_page).items);
        }
        prop_assert_eq!(seen, items);
    }
}
