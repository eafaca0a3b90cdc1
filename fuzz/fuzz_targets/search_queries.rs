// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries and configurations at the query engine. It must
//! never panic, every hit must contain every query token, and hits must come
//! back best first.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use satchel::search::{candidate_content, normalize, parse_query, SearchOutcome, Searcher};
use satchel::testing::bag_collection;
use satchel::{IndexCollection, QueryConfig};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    query: &'a str,
    include_url: bool,
    fold_diacritics: bool,
    limit: Option<u8>,
}

fuzz_target!(|input: Input<'_>| {
    static COLLECTION: std::sync::OnceLock<IndexCollection> = std::sync::OnceLock::new();
    let collection = COLLECTION.get_or_init(bag_collection);

    let config = QueryConfig {
        include_url: input.include_url,
        fold_diacritics: input.fold_diacritics,
        limit: input.limit.map(usize::from),
        ..QueryConfig::default()
    };
    let searcher = Searcher::new(collection, config);

    match searcher.search(input.query) {
        SearchOutcome::EmptyQuery => {
            // Folding can strip a query of combining marks down to nothing
            assert!(parse_query(input.query, input.fold_diacritics).is_empty());
        }
        SearchOutcome::NoMatches => {}
        SearchOutcome::Matches(hits) => {
            assert!(!hits.is_empty());
            let query = normalize(input.query.trim(), input.fold_diacritics);
            for hit in &hits {
                let content = normalize(
                    &candidate_content(hit.record, input.include_url),
                    input.fold_diacritics,
                );
                for token in query.split_whitespace() {
                    assert!(content.contains(token), "hit without token {:?}", token);
                }
            }
            for pair in hits.windows(2) {
                assert!(pair[0].score >= pair[1].score, "hits out of order");
            }
        }
    }
});
