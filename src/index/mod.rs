// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The collection: every record, newest first.
//!
//! An [`IndexCollection`] is built once from scanner output and never mutated.
//! Construction sorts by `date` descending with a stable sort, so records that
//! share a date keep the order the scanner found them in. That order is the
//! final tie-breaker for search ranking too.
//!
//! On disk it is a bare JSON array (see [`store`]). Reading ignores fields it
//! doesn't know, so the site can add `image` or `readingTime` without breaking
//! older readers.

pub mod store;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{Category, DocumentRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexCollection {
    records: Vec<DocumentRecord>,
}

impl IndexCollection {
    /// Sort `records` newest first and wrap them.
    pub fn from_records(mut records: Vec<DocumentRecord>) -> Self {
        sort_newest_first(&mut records);
        Self { records }
    }

    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<DocumentRecord> {
        self.records
    }

    /// True if every adjacent pair satisfies `a.date >= b.date`.
    pub fn is_sorted_newest_first(&self) -> bool {
        self.records.windows(2).all(|w| w[0].date >= w[1].date)
    }

    /// `(oldest, newest)` dates, or `None` when empty.
    pub fn date_range(&self) -> Option<(&str, &str)> {
        let newest = self.records.first()?;
        let oldest = self.records.last()?;
        Some((oldest.date.as_str(), newest.date.as_str()))
    }

    /// Record count per category, in category order.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.category).or_insert(0) += 1;
        }
        counts
    }

    /// Record count per tag, in tag order.
    pub fn tag_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.records.iter().flat_map(|r| r.tags.iter()) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// URLs that occur more than once. Deep links break on these.
    pub fn duplicate_urls(&self) -> Vec<&str> {
        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &self.records {
            *seen.entry(record.url.as_str()).or_insert(0) += 1;
        }
        seen.into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(url, _)| url)
            .collect()
    }
}

impl<'a> IntoIterator for &'a IndexCollection {
    type Item = &'a DocumentRecord;
    type IntoIter = std::slice::Iter<'a, DocumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Descending string order on `date`. `sort_by` is stable.
pub fn sort_newest_first(records: &mut [DocumentRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
