// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scanner and query configuration.
//!
//! Everything the scanner "knows" about the site (which directories hold
//! articles, what a backup file looks like, which brands are worth tagging)
//! lives in plain structs passed in at construction time. The `Default` impls
//! carry the live site's values; tests build their own.
//!
//! All structs deserialize with `#[serde(default)]`, so a manifest only has to
//! spell out what it changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::ScoringWeights;
use crate::types::{Category, DATE_FORMAT};

/// Where to look, what to skip, and how to classify what's found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanConfig {
    /// Subdirectories of the site root walked recursively.
    pub include_dirs: Vec<String>,
    /// Individual pages directly under the site root.
    pub include_files: Vec<String>,
    /// File extension of content pages, without the dot.
    pub extension: String,
    /// Any path containing this marker is a backup copy and is skipped.
    pub backup_marker: String,
    /// Directory names never descended into.
    pub exclude_dirs: Vec<String>,
    /// CSS class of the `<span>` holding the human-readable publication date.
    pub date_marker_class: String,
    /// Last-resort date, `YYYY-MM-DD`.
    pub default_date: String,
    pub categories: CategoryRules,
    pub tags: Vec<TagRule>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_dirs: strings(&["articles", "categories"]),
            include_files: strings(&["index.html", "privacy-policy.html", "affiliate-disclosure.html"]),
            extension: "html".to_string(),
            backup_marker: ".bak_".to_string(),
            exclude_dirs: strings(&[".git", "node_modules", "dist", "build", "target"]),
            date_marker_class: "article-meta".to_string(),
            default_date: "2025-01-01".to_string(),
            categories: CategoryRules::default(),
            tags: default_tag_vocabulary(),
        }
    }
}

impl ScanConfig {
    /// Reject configurations the scanner can't honour.
    pub fn validate(&self) -> Result<()> {
        if self.extension.trim_start_matches('.').is_empty() {
            return Err(Error::Config("extension must not be empty".into()));
        }
        if self.include_dirs.is_empty() && self.include_files.is_empty() {
            return Err(Error::Config(
                "nothing to scan: includeDirs and includeFiles are both empty".into(),
            ));
        }
        self.default_date()?;
        if let Some(rule) = self.tags.iter().find(|r| r.tag.trim().is_empty()) {
            return Err(Error::Config(format!(
                "tag rule with needles {:?} has an empty tag",
                rule.needles
            )));
        }
        Ok(())
    }

    /// The configured fallback date, parsed.
    pub fn default_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.default_date, DATE_FORMAT).map_err(|e| {
            Error::Config(format!(
                "defaultDate '{}' is not YYYY-MM-DD: {}",
                self.default_date, e
            ))
        })
    }

    /// Extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// Ordered category rules. Path rules are tried first, then exact landing-page
/// URLs, then title keywords. First match wins; nothing matching means
/// [`Category::General`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryRules {
    pub paths: Vec<PathRule>,
    pub titles: Vec<TitleRule>,
    pub pages: Vec<PageRule>,
}

/// `fragment` is a substring of the page URL. When `within` is set the URL
/// must contain it too, anywhere: `within: "/categories/"` with fragment
/// `handbags` matches `/categories/best-handbags.html`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRule {
    pub fragment: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub within: Option<String>,
}

impl PathRule {
    pub fn new(fragment: &str, category: Category) -> Self {
        Self {
            fragment: fragment.to_string(),
            category,
            within: None,
        }
    }

    pub fn scoped(scope: &str, fragment: &str, category: Category) -> Self {
        Self {
            within: Some(scope.to_string()),
            ..Self::new(fragment, category)
        }
    }

    pub fn matches(&self, url: &str) -> bool {
        url.contains(self.fragment.as_str())
            && self.within.as_deref().map_or(true, |scope| url.contains(scope))
    }
}

/// `keyword` is a lower-case substring of the page title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRule {
    pub keyword: String,
    pub category: Category,
}

/// `url` must equal the page URL exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRule {
    pub url: String,
    pub category: Category,
}

impl Default for CategoryRules {
    fn default() -> Self {
        use Category::*;

        let articles = [
            ("/articles/handbags", Handbags),
            ("/articles/backpacks", Backpacks),
            ("/articles/wallets", Wallets),
            ("/articles/tote-bags", ToteBags),
        ];
        // Anything under /categories/ that names a category
        let categories = [
            ("handbags", Handbags),
            ("backpacks", Backpacks),
            ("wallets", Wallets),
            ("tote-bags", ToteBags),
        ];
        let titles = [
            ("handbag", Handbags),
            ("bolsos de mano", Handbags),
            ("backpack", Backpacks),
            ("mochilas", Backpacks),
            ("wallet", Wallets),
            ("carteras", Wallets),
            ("tote", ToteBags),
            ("privacy", Legal),
            ("affiliate", Legal),
        ];
        let pages = [
            ("/index.html", Homepage),
            ("/articles/index.html", Articles),
            ("/categories/index.html", Categories),
        ];

        Self {
            paths: articles
                .into_iter()
                .map(|(fragment, category)| PathRule::new(fragment, category))
                .chain(
                    categories
                        .into_iter()
                        .map(|(fragment, category)| PathRule::scoped("/categories/", fragment, category)),
                )
                .collect(),
            titles: titles
                .into_iter()
                .map(|(keyword, category)| TitleRule {
                    keyword: keyword.to_string(),
                    category,
                })
                .collect(),
            pages: pages
                .into_iter()
                .map(|(url, category)| PageRule {
                    url: url.to_string(),
                    category,
                })
                .collect(),
        }
    }
}

impl CategoryRules {
    /// Path rules only; no title or landing-page refinement.
    pub fn paths_only(paths: Vec<PathRule>) -> Self {
        Self {
            paths,
            titles: Vec::new(),
            pages: Vec::new(),
        }
    }
}

/// One tag and the lower-case substrings that earn it.
///
/// An empty `needles` list means the tag is its own needle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRule {
    pub tag: String,
    #[serde(default)]
    pub needles: Vec<String>,
}

impl TagRule {
    pub fn literal(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            needles: Vec::new(),
        }
    }

    pub fn with_needles(tag: &str, needles: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            needles: strings(needles),
        }
    }

    /// True if any needle occurs in `haystack`, which must already be lower-cased.
    pub fn matches(&self, haystack: &str) -> bool {
        if self.needles.is_empty() {
            return haystack.contains(&self.tag.to_lowercase());
        }
        self.needles
            .iter()
            .any(|needle| haystack.contains(&needle.to_lowercase()))
    }
}

/// Brands, product styles and price tiers the site writes about.
pub fn default_tag_vocabulary() -> Vec<TagRule> {
    const BRANDS: &[&str] = &[
        "coach",
        "osprey",
        "tory burch",
        "valentino",
        "gucci",
        "prada",
        "louis vuitton",
        "bottega veneta",
    ];
    const STYLES: &[&str] = &[
        "crossbody",
        "tote",
        "backpack",
        "wallet",
        "clutch",
        "hobo",
        "satchel",
        "messenger",
        "laptop",
        "work",
        "travel",
        "hiking",
        "professional",
        "casual",
        "elegant",
        "minimalist",
    ];

    let mut rules: Vec<TagRule> = BRANDS
        .iter()
        .chain(STYLES)
        .map(|tag| TagRule::literal(tag))
        .collect();
    rules.push(TagRule::with_needles("affordable", &["affordable", "budget"]));
    rules.push(TagRule::with_needles("under 100", &["under 100", "under $100"]));
    rules.push(TagRule::with_needles("luxury", &["luxury", "expensive"]));
    rules
}

/// Query engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryConfig {
    /// Fold the record URL into candidate content.
    pub include_url: bool,
    /// Strip diacritics from both query and content before matching.
    pub fold_diacritics: bool,
    /// Cap on returned hits. `None` returns every match.
    pub limit: Option<usize>,
    pub weights: ScoringWeights,
}

impl QueryConfig {
    /// Layer command-line switches over this config.
    ///
    /// Switches only ever turn an option on; a limit, when given, replaces
    /// the configured one.
    pub fn with_overrides(
        mut self,
        include_url: bool,
        fold_diacritics: bool,
        limit: Option<usize>,
    ) -> Self {
        self.include_url |= include_url;
        self.fold_diacritics |= fold_diacritics;
        if limit.is_some() {
            self.limit = limit;
        }
        self
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
