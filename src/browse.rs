// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browsing helpers around the query engine.
//!
//! Category filtering, pagination, typeahead suggestions, and the data behind
//! the "no results" screen. All of these are views over an
//! [`IndexCollection`]: they borrow records and never reorder the index
//! except where noted.

use std::collections::BTreeMap;

use crate::index::IndexCollection;
use crate::search::candidate_content;
use crate::types::{Category, DocumentRecord};

/// Records per page when none is given.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Newest records shown on the "no results" screen.
pub const DEFAULT_LATEST: usize = 4;

/// Article suggestions shown while typing.
pub const MAX_ARTICLE_SUGGESTIONS: usize = 3;

/// Popular-term suggestions shown while typing.
pub const MAX_TERM_SUGGESTIONS: usize = 5;

/// Terms offered by the typeahead when nothing else is configured.
pub const DEFAULT_POPULAR_TERMS: &[&str] = &[
    "carteras",
    "bolsos de mano",
    "mochilas",
    "trabajo",
    "elegantes",
    "profesionales",
    "organizadoras",
    "lujo",
    "funcionales",
    "comodidad",
];

/// Records of one category, in index (newest-first) order.
pub fn filter_by_category(collection: &IndexCollection, category: Category) -> Vec<&DocumentRecord> {
    collection.iter().filter(|r| r.category == category).collect()
}

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, after clamping.
    pub number: usize,
    pub per_page: usize,
    /// At least 1, even for an empty input.
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice `items` into 1-based pages of `per_page`.
///
/// Page 0 is treated as page 1 and pages past the end clamp to the last page.
/// A `per_page` of 0 falls back to [`DEFAULT_PER_PAGE`].
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = if per_page == 0 { DEFAULT_PER_PAGE } else { per_page };
    let total_pages = items.len().div_ceil(per_page).max(1);
    let number = page.clamp(1, total_pages);
    let start = (number - 1) * per_page;
    let end = (start + per_page).min(items.len());

    Page {
        items: &items[start.min(items.len())..end],
        number,
        per_page,
        total_pages,
        total_items: items.len(),
    }
}

/// What to show instead of an empty result list.
#[derive(Debug, Clone, PartialEq)]
pub struct Fallback<'a> {
    /// Non-empty categories, most articles first, ties by name.
    pub categories: Vec<(Category, usize)>,
    /// The newest records.
    pub latest: Vec<&'a DocumentRecord>,
}

/// Build the "no results" state: category counts and the `latest` newest records.
pub fn fallback(collection: &IndexCollection, latest: usize) -> Fallback<'_> {
    let mut categories: Vec<(Category, usize)> = collection.category_counts().into_iter().collect();
    categories.sort_by(|(a_cat, a_n), (b_cat, b_n)| {
        b_n.cmp(a_n).then_with(|| a_cat.as_str().cmp(b_cat.as_str()))
    });

    Fallback {
        categories,
        latest: collection.iter().take(latest).collect(),
    }
}

/// Typeahead suggestions for a partially typed query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions<'a> {
    pub articles: Vec<&'a DocumentRecord>,
    pub terms: Vec<&'a str>,
}

impl Suggestions<'_> {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty() && self.terms.is_empty()
    }
}

/// Articles whose searchable text contains `input`, and popular terms that
/// contain it. Case-insensitive substring match; at most
/// [`MAX_ARTICLE_SUGGESTIONS`] articles and [`MAX_TERM_SUGGESTIONS`] terms.
pub fn suggest<'a>(
    collection: &'a IndexCollection,
    input: &str,
    popular_terms: &[&'a str],
) -> Suggestions<'a> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Suggestions::default();
    }

    let articles = collection
        .iter()
        .filter(|r| candidate_content(r, false).to_lowercase().contains(&needle))
        .take(MAX_ARTICLE_SUGGESTIONS)
        .collect();

    let mut terms: Vec<&'a str> = Vec::new();
    for term in popular_terms {
        if terms.len() == MAX_TERM_SUGGESTIONS {
            break;
        }
        if term.to_lowercase().contains(&needle) && !terms.contains(term) {
            terms.push(*term);
        }
    }

    Suggestions { articles, terms }
}

/// Records grouped by category, each group in index order.
pub fn group_by_category(collection: &IndexCollection) -> BTreeMap<Category, Vec<&DocumentRecord>> {
    let mut groups: BTreeMap<Category, Vec<&DocumentRecord>> = BTreeMap::new();
    for record in collection {
        groups.entry(record.category).or_default().push(record);
    }
    groups
}
