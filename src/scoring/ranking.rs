// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search hits get sorted.
//!
//! Higher score first. Equal scores keep index order, and index order is
//! newest-first, so among equally relevant records the most recent one wins.

use crate::search::SearchHit;
use std::cmp::Ordering;

/// Compare two hits for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Position** - ascending index position (newer first)
pub fn compare_hits(a: &SearchHit<'_>, b: &SearchHit<'_>) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.position.cmp(&b.position),
    }
}
