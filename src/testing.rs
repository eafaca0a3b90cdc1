// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::IndexCollection;
use crate::types::{Category, DocumentRecord};

/// Create a simple record with default fields.
///
/// The URL is derived from the title, category is `General`, no tags.
pub fn make_record(title: &str, date: &str) -> DocumentRecord {
    DocumentRecord {
        title: title.to_string(),
        url: format!("/articles/{}.html", slugify(title)),
        category: Category::General,
        tags: vec![],
        date: date.to_string(),
        excerpt: String::new(),
    }
}

/// Create a record with category and tags.
pub fn make_tagged_record(
    title: &str,
    category: Category,
    tags: &[&str],
    date: &str,
) -> DocumentRecord {
    DocumentRecord {
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_record(title, date)
    }
}

/// The three-record collection used by the end-to-end search scenarios.
///
/// Newest first: Osprey Travel Tote, Classic Leather Wallet, Osprey Hiking Backpack.
pub fn bag_collection() -> IndexCollection {
    IndexCollection::from_records(vec![
        make_tagged_record(
            "Osprey Hiking Backpack",
            Category::Backpacks,
            &["osprey", "backpack", "hiking"],
            "2025-01-10",
        ),
        make_tagged_record("Classic Leather Wallet", Category::Wallets, &["wallet"], "2025-02-01"),
        make_tagged_record(
            "Osprey Travel Tote",
            Category::ToteBags,
            &["osprey", "tote"],
            "2025-03-01",
        ),
    ])
}

/// Minimal HTML page with the markers the scanner looks for.
pub fn make_page(title: Option<&str>, description: Option<&str>, meta: Option<&str>, body: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    if let Some(title) = title {
        html.push_str(&format!("  <title>{}</title>\n", title));
    }
    if let Some(description) = description {
        html.push_str(&format!(
            "  <meta name=\"description\" content=\"{}\">\n",
            description
        ));
    }
    html.push_str("</head>\n<body>\n");
    if let Some(meta) = meta {
        html.push_str(&format!("  <span class=\"article-meta\">{}</span>\n", meta));
    }
    html.push_str(&format!("  <main>{}</main>\n</body>\n</html>\n", body));
    html
}

fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
