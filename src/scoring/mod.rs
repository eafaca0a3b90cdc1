// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! An exact phrase dominates per-token signals. A record containing
//! "osprey backpack" verbatim outranks one that merely mentions both words,
//! even in its title, as long as the query is short enough that the summed
//! title-token edge stays below the phrase weight (fewer than ten tokens with
//! the default weights).

mod core;
pub mod ranking;

pub use self::core::*;
