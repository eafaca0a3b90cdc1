// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record that every page becomes.
//!
//! A [`DocumentRecord`] is the flat, six-field object the browser fetches and
//! filters. The field names are the wire format: the site's JavaScript reads
//! `title`, `url`, `category`, `tags`, `date` and `excerpt` straight out of the
//! JSON, so renaming anything here is a breaking change for the site.
//!
//! # Invariants
//!
//! - `url` starts with exactly one `/`.
//! - `tags` holds at most [`MAX_TAGS`] lower-cased entries, sorted and unique.
//! - `date` is a zero-padded `YYYY-MM-DD` string, so string order is date order.
//!
//! The scanner establishes all three. Records read back from disk are trusted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of tags kept per record.
pub const MAX_TAGS: usize = 10;

/// Title used when a page has no `<title>`.
pub const UNTITLED: &str = "Untitled";

/// Format used for `DocumentRecord::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The closed set of site sections a record can belong to.
///
/// Serialized by display name because the site's category filter buttons
/// compare against these exact strings. Anything unrecognised in a foreign
/// index reads back as `General`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Handbags,
    Backpacks,
    Wallets,
    #[serde(rename = "Tote Bags")]
    ToteBags,
    Legal,
    Articles,
    Categories,
    Homepage,
    #[default]
    #[serde(other)]
    General,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Handbags,
        Category::Backpacks,
        Category::Wallets,
        Category::ToteBags,
        Category::Legal,
        Category::Articles,
        Category::Categories,
        Category::Homepage,
        Category::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Handbags => "Handbags",
            Category::Backpacks => "Backpacks",
            Category::Wallets => "Wallets",
            Category::ToteBags => "Tote Bags",
            Category::Legal => "Legal",
            Category::Articles => "Articles",
            Category::Categories => "Categories",
            Category::Homepage => "Homepage",
            Category::General => "General",
        }
    }

    /// Case-insensitive lookup by display name. Accepts `tote-bags` too.
    pub fn from_name(name: &str) -> Option<Category> {
        let wanted = name.trim().replace('-', " ");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&wanted))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: String,
    #[serde(default)]
    pub excerpt: String,
}

impl DocumentRecord {
    /// Tags joined with single spaces, the way they appear in candidate content.
    pub fn joined_tags(&self) -> String {
        self.tags.join(" ")
    }
}
