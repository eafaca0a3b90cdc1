// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: from a raw query string to a ranked list of records.
//!
//! A [`Searcher`] normalizes every record's candidate content once, up front,
//! so repeated queries only pay for matching. Searching is a pure function of
//! `(collection, query)`.
//!
//! [`SearchOutcome`] keeps "nothing typed" and "nothing matched" apart; the
//! site shows different screens for them.

pub mod utils;

use crate::config::QueryConfig;
use crate::index::IndexCollection;
use crate::scoring::ranking::compare_hits;
use crate::scoring::score_candidate;
use crate::types::DocumentRecord;

pub use utils::{normalize, parse_query};

/// One matching record with its score and position in the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub record: &'a DocumentRecord,
    /// Index position; lower is newer.
    pub position: usize,
    pub score: f64,
}

/// What a query produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// The query had no tokens. Nothing was searched.
    EmptyQuery,
    /// The query was searched and nothing matched every token.
    NoMatches,
    /// Ranked hits, best first. Never empty.
    Matches(Vec<SearchHit<'a>>),
}

impl<'a> SearchOutcome<'a> {
    pub fn hits(&self) -> &[SearchHit<'a>] {
        match self {
            SearchOutcome::Matches(hits) => hits,
            _ => &[],
        }
    }

    /// Records in rank order; empty unless `Matches`.
    pub fn records(&self) -> Vec<&'a DocumentRecord> {
        self.hits().iter().map(|h| h.record).collect()
    }

    pub fn len(&self) -> usize {
        self.hits().len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits().is_empty()
    }

    /// True only when a real query matched nothing: the "no results" screen.
    pub fn is_no_matches(&self) -> bool {
        matches!(self, SearchOutcome::NoMatches)
    }
}

/// Normalized text of one record.
#[derive(Debug, Clone)]
struct Candidate {
    content: String,
    title: String,
}

/// Query engine over one collection.
#[derive(Debug, Clone)]
pub struct Searcher<'a> {
    collection: &'a IndexCollection,
    config: QueryConfig,
    candidates: Vec<Candidate>,
}

impl<'a> Searcher<'a> {
    pub fn new(collection: &'a IndexCollection, config: QueryConfig) -> Self {
        let candidates = collection
            .iter()
            .map(|record| Candidate {
                content: normalize(&candidate_content(record, config.include_url), config.fold_diacritics),
                title: normalize(&record.title, config.fold_diacritics),
            })
            .collect();
        Self {
            collection,
            config,
            candidates,
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn collection(&self) -> &'a IndexCollection {
        self.collection
    }

    /// Score every record against `query` and rank the survivors.
    ///
    /// Never fails: any string is a valid query.
    pub fn search(&self, query: &str) -> SearchOutcome<'a> {
        let parsed = parse_query(query, self.config.fold_diacritics);
        if parsed.is_empty() {
            return SearchOutcome::EmptyQuery;
        }

        let records = self.collection.records();
        let mut hits: Vec<SearchHit<'a>> = self
            .candidates
            .iter()
            .enumerate()
            .filter_map(|(position, candidate)| {
                score_candidate(&candidate.content, &candidate.title, &parsed, &self.config.weights)
                    .map(|score| SearchHit {
                        record: &records[position],
                        position,
                        score,
                    })
            })
            .collect();

        if hits.is_empty() {
            return SearchOutcome::NoMatches;
        }

        // sort_by is stable; compare_hits also breaks ties on position
        hits.sort_by(compare_hits);
        if let Some(limit) = self.config.limit {
            hits.truncate(limit.max(1));
        }
        SearchOutcome::Matches(hits)
    }
}

/// The text a query is matched against: title, category, tags, excerpt, and
/// optionally the URL, joined with single spaces.
pub fn candidate_content(record: &DocumentRecord, include_url: bool) -> String {
    let mut parts = vec![
        record.title.as_str(),
        record.category.as_str(),
    ];
    let tags = record.joined_tags();
    parts.push(&tags);
    parts.push(&record.excerpt);
    if include_url {
        parts.push(&record.url);
    }
    parts.join(" ")
}

/// Rank `collection` against `query` with the default configuration.
///
/// Empty or whitespace-only queries return an empty list, as does a query
/// nothing matches; use [`Searcher::search`] to tell those apart.
pub fn search<'a>(collection: &'a IndexCollection, query: &str) -> Vec<&'a DocumentRecord> {
    Searcher::new(collection, QueryConfig::default())
        .search(query)
        .records()
}
