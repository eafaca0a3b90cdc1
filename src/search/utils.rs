// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for the query engine.
//!
//! Query parsing and text normalization. Both sides of a comparison (query
//! and candidate content) must go through the same [`normalize`], otherwise
//! "Mochilas" and "mochilas" stop matching.

use crate::scoring::ParsedQuery;

/// Lower-case, and with `fold_diacritics` strip combining marks after NFD
/// decomposition (`artículos` → `articulos`).
pub fn normalize(text: &str, fold_diacritics: bool) -> String {
    let lower = text.to_lowercase();
    if fold_diacritics {
        fold(&lower)
    } else {
        lower
    }
}

#[cfg(feature = "unicode-normalization")]
fn fold(text: &str) -> String {
    use unicode_normalization::char::is_combining_mark;
    use unicode_normalization::UnicodeNormalization;

    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold(text: &str) -> String {
    text.to_string()
}

/// Parse a query string into the normalized phrase and its whitespace tokens.
///
/// # Example
///
/// ```ignore
/// let q = parse_query("  Osprey   Backpack ", false);
/// assert_eq!(q.phrase, "osprey   backpack");
/// assert_eq!(q.tokens, vec!["osprey", "backpack"]);
/// ```
pub fn parse_query(query: &str, fold_diacritics: bool) -> ParsedQuery {
    let phrase = normalize(query.trim(), fold_diacritics);
    let tokens = phrase
        .split_whitespace()
        .map(|s| s.to_string())
        .collect();
    ParsedQuery { phrase, tokens }
}
