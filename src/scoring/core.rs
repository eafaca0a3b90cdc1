// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! One scoring function, five ingredients, applied in a fixed precedence:
//!
//! ```text
//! phrase in content   > phrase in title > token in title > token in content
//!        100                  50                20                10
//! ```
//!
//! On top of that, a record that contains every token earns a flat bonus, and
//! each token earns a small typo-tolerance bonus scaled by its best word
//! similarity. A record missing any token scores `None` and is dropped: the
//! query is an AND, not an OR.
//!
//! # Invariant: Phrase Dominance
//!
//! The defaults satisfy, and [`ScoringWeights::validate`] enforces:
//!
//! ```text
//! phrase_in_content > phrase_in_title > token_in_title > token_in_content > 0
//! 0 < fuzzy_threshold <= 1
//! ```
//!
//! The absolute numbers are tunable; the order is not.
//!
//! Per-token weights add up, so precedence is per signal, not per record. A
//! phrase-in-content record beats one with every token in its title only
//! while `n * (token_in_title - token_in_content) < phrase_in_content`; with
//! the defaults that holds for queries of up to nine tokens.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Full query string found anywhere in candidate content.
pub const PHRASE_IN_CONTENT_SCORE: f64 = 100.0;

/// Full query string found in the title. Stacks with the content bonus.
pub const PHRASE_IN_TITLE_SCORE: f64 = 50.0;

/// Per token found in the title.
pub const TOKEN_IN_TITLE_SCORE: f64 = 20.0;

/// Per token found in content but not in the title.
pub const TOKEN_IN_CONTENT_SCORE: f64 = 10.0;

/// Flat bonus for matching every token.
pub const ALL_TERMS_BONUS: f64 = 30.0;

/// Multiplier for the best similarity ratio of each token.
pub const FUZZY_BONUS_SCALE: f64 = 10.0;

/// Similarity a word must exceed to count as a near match.
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Tunable weights. Defaults are the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    pub phrase_in_content: f64,
    pub phrase_in_title: f64,
    pub token_in_title: f64,
    pub token_in_content: f64,
    pub all_terms: f64,
    pub fuzzy_scale: f64,
    pub fuzzy_threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            phrase_in_content: PHRASE_IN_CONTENT_SCORE,
            phrase_in_title: PHRASE_IN_TITLE_SCORE,
            token_in_title: TOKEN_IN_TITLE_SCORE,
            token_in_content: TOKEN_IN_CONTENT_SCORE,
            all_terms: ALL_TERMS_BONUS,
            fuzzy_scale: FUZZY_BONUS_SCALE,
            fuzzy_threshold: FUZZY_THRESHOLD,
        }
    }
}

impl ScoringWeights {
    /// Check the precedence order and value ranges.
    pub fn validate(&self) -> Result<()> {
        let ordered = self.phrase_in_content > self.phrase_in_title
            && self.phrase_in_title > self.token_in_title
            && self.token_in_title > self.token_in_content
            && self.token_in_content > 0.0;
        if !ordered {
            return Err(Error::Config(format!(
                "weights must satisfy phraseInContent > phraseInTitle > tokenInTitle > tokenInContent > 0, got {} > {} > {} > {}",
                self.phrase_in_content, self.phrase_in_title, self.token_in_title, self.token_in_content
            )));
        }
        if self.all_terms < 0.0 || self.fuzzy_scale < 0.0 {
            return Err(Error::Config(
                "allTerms and fuzzyScale must not be negative".into(),
            ));
        }
        if !(self.fuzzy_threshold > 0.0 && self.fuzzy_threshold <= 1.0) {
            return Err(Error::Config(format!(
                "fuzzyThreshold must be in (0, 1], got {}",
                self.fuzzy_threshold
            )));
        }
        Ok(())
    }
}

/// Lower-cased query: the whole string and its whitespace tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub phrase: String,
    pub tokens: Vec<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Similarity of two words in `[0, 1]`; 1.0 means identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Best similarity between `token` and any whitespace-separated word of `content`.
pub fn best_word_similarity(token: &str, content: &str) -> f64 {
    content
        .split_whitespace()
        .map(|word| similarity(token, word))
        .fold(0.0, f64::max)
}

/// Score one record's normalized text against a parsed query.
///
/// `content` and `title` must already be normalized the same way as the
/// query (lower-cased, optionally diacritic-folded). Returns `None` when the
/// query is empty or any token is missing from `content`.
pub fn score_candidate(
    content: &str,
    title: &str,
    query: &ParsedQuery,
    weights: &ScoringWeights,
) -> Option<f64> {
    if query.is_empty() {
        return None;
    }
    // AND admission: every token must appear somewhere
    if !query.tokens.iter().all(|t| content.contains(t.as_str())) {
        return None;
    }

    let mut score = 0.0;

    if content.contains(query.phrase.as_str()) {
        score += weights.phrase_in_content;
    }
    if title.contains(query.phrase.as_str()) {
        score += weights.phrase_in_title;
    }

    for token in &query.tokens {
        score += if title.contains(token.as_str()) {
            weights.token_in_title
        } else {
            weights.token_in_content
        };
    }

    score += weights.all_terms;

    if weights.fuzzy_scale > 0.0 {
        for token in &query.tokens {
            let best = best_word_similarity(token, content);
            if best > weights.fuzzy_threshold {
                score += best * weights.fuzzy_scale;
            }
        }
    }

    Some(score)
}
