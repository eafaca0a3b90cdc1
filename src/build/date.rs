// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Publication dates and where they came from.
//!
//! Three tiers, tried in order, none of which can fail:
//!
//! 1. `Parsed` - a `Month D, YYYY` date inside the article-meta marker
//! 2. `FallbackFromMtime` - the file's modification time, local calendar date
//! 3. `Default` - the configured fallback date
//!
//! Keeping the tier in the type means the build report can say how many
//! pages are missing a real date, instead of silently dating them all today.

use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::types::DATE_FORMAT;

/// `October 5, 2025`, `March 12,2024`. Month names are matched loosely here
/// and validated by chrono.
static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]{3,9})\.?\s+(\d{1,2}),\s*(\d{4})").expect("valid date regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedDate {
    Parsed(NaiveDate),
    FallbackFromMtime(NaiveDate),
    Default(NaiveDate),
}

impl PublishedDate {
    pub fn date(self) -> NaiveDate {
        match self {
            PublishedDate::Parsed(d)
            | PublishedDate::FallbackFromMtime(d)
            | PublishedDate::Default(d) => d,
        }
    }

    /// Zero-padded `YYYY-MM-DD`.
    pub fn to_index_string(self) -> String {
        self.date().format(DATE_FORMAT).to_string()
    }
}

/// Pull a `Month D, YYYY` date out of marker text.
///
/// The marker often carries more than the date (`October 5, 2025 · 8 min
/// read`), so this searches rather than matching the whole string. Only the
/// first candidate is tried.
pub fn parse_marker_date(text: &str) -> Option<NaiveDate> {
    let caps = MONTH_DAY_YEAR.captures(text)?;
    let normalized = format!("{} {}, {}", &caps[1], &caps[2], &caps[3]);
    NaiveDate::parse_from_str(&normalized, "%B %d, %Y").ok()
}

/// Local calendar date of the file's modification time.
pub fn mtime_date(path: &Path) -> Option<NaiveDate> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Local>::from(modified).date_naive())
}

/// Apply the three tiers. `mtime` is only called when the marker doesn't yield a date.
pub fn resolve(
    marker: Option<&str>,
    mtime: impl FnOnce() -> Option<NaiveDate>,
    default: NaiveDate,
) -> PublishedDate {
    if let Some(date) = marker.and_then(parse_marker_date) {
        return PublishedDate::Parsed(date);
    }
    match mtime() {
        Some(date) => PublishedDate::FallbackFromMtime(date),
        None => PublishedDate::Default(default),
    }
}

/// How many records got their date from each tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTierCounts {
    pub parsed: usize,
    pub from_mtime: usize,
    pub defaulted: usize,
}

impl DateTierCounts {
    pub fn record(&mut self, date: PublishedDate) {
        match date {
            PublishedDate::Parsed(_) => self.parsed += 1,
            PublishedDate::FallbackFromMtime(_) => self.from_mtime += 1,
            PublishedDate::Default(_) => self.defaulted += 1,
        }
    }
}
