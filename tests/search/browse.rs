//! Category filter, pagination and the no-results screen.

use super::common::{bag_collection, make_tagged_record, titles};
use satchel::browse::{
    fallback, filter_by_category, paginate, suggest, DEFAULT_LATEST, DEFAULT_PER_PAGE,
    DEFAULT_POPULAR_TERMS,
};
use satchel::search::Searcher;
use satchel::{Category, IndexCollection, QueryConfig};

fn many_backpacks(n: usize) -> IndexCollection {
    let records = (0..n)
        .map(|i| {
            make_tagged_record(
                &format!("Backpack {:02}", i),
                Category::Backpacks,
                &["backpack"],
                &format!("2025-01-{:02}", i % 28 + 1),
            )
        })
        .collect();
    IndexCollection::from_records(records)
}

#[test]
fn test_filter_then_paginate() {
    let collection = many_backpacks(23);
    let backpacks = filter_by_category(&collection, Category::Backpacks);
    assert_eq!(backpacks.len(), 23);

    let page = paginate(&backpacks, 3, DEFAULT_PER_PAGE);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 3);
    assert!(!page.has_next());

    // Pages concatenate back to the filtered list
    let mut all = Vec::new();
    for n in 1..=page.total_pages {
        all.extend_from_slice(paginate(&backpacks, n, DEFAULT_PER_PAGE).items);
    }
    assert_eq!(all, backpacks);
}

#[test]
fn test_paginate_search_results() {
    let collection = many_backpacks(15);
    let searcher = Searcher::new(&collection, QueryConfig::default());
    let records = searcher.search("backpack").records();
    assert_eq!(records.len(), 15);
    assert_eq!(paginate(&records, 2, 10).items.len(), 5);
}

#[test]
fn test_no_results_fallback() {
    let collection = bag_collection();
    let searcher = Searcher::new(&collection, QueryConfig::default());
    assert!(searcher.search("duffel").is_no_matches());

    let fb = fallback(&collection, DEFAULT_LATEST);
    assert_eq!(
        fb.categories,
        vec![
            (Category::Backpacks, 1),
            (Category::ToteBags, 1),
            (Category::Wallets, 1),
        ]
    );
    assert_eq!(
        titles(&fb.latest),
        vec!["Osprey Travel Tote", "Classic Leather Wallet", "Osprey Hiking Backpack"]
    );
}

#[test]
fn test_suggestions_for_partial_input() {
    let collection = bag_collection();
    let s = suggest(&collection, "leath", DEFAULT_POPULAR_TERMS);
    assert_eq!(titles(&s.articles), vec!["Classic Leather Wallet"]);

    let s = suggest(&collection, "moch", DEFAULT_POPULAR_TERMS);
    assert!(s.articles.is_empty());
    assert_eq!(s.terms, vec!["mochilas"]);
}
