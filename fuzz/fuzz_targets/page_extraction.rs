// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for HTML field extraction.
//!
//! Any page text becomes exactly one record: non-empty title, a valid
//! `YYYY-MM-DD` date, and at most ten sorted tags.

#![no_main]

use libfuzzer_sys::fuzz_target;
use satchel::build::Extractor;
use satchel::types::{DATE_FORMAT, MAX_TAGS};
use satchel::ScanConfig;

fuzz_target!(|html: &str| {
    static EXTRACTOR: std::sync::OnceLock<Extractor> = std::sync::OnceLock::new();
    let extractor = EXTRACTOR.get_or_init(|| {
        Extractor::new(&ScanConfig::default()).expect("default config is valid")
    });

    let extracted = extractor.extract_html("/articles/fuzz.html", html, || None);
    let record = extracted.record;

    assert!(!record.title.is_empty());
    assert!(chrono::NaiveDate::parse_from_str(&record.date, DATE_FORMAT).is_ok());
    assert!(record.tags.len() <= MAX_TAGS);
    assert!(record.tags.windows(2).all(|w| w[0] < w[1]));
});
