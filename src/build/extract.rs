// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning one HTML page into one [`DocumentRecord`].
//!
//! Extraction is regex-based over the site's template markers. Every field
//! has a fallback, so a page with no `<title>`, no description and no date
//! still becomes a record.
//!
//! The only thing that drops a page is failing to read it at all.

use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use super::date::{self, PublishedDate};
use crate::config::{CategoryRules, ScanConfig, TagRule};
use crate::error::{Error, Result};
use crate::types::{Category, DocumentRecord, MAX_TAGS, UNTITLED};

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title regex"));

static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<meta\s+name\s*=\s*["']description["']\s+content\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
    )
    .expect("valid description regex")
});

/// Why a page didn't make it into the index.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("unreadable: {0}")]
    Unreadable(#[from] std::io::Error),
}

/// A page that was skipped, and why.
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// A record plus the tier its date came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub record: DocumentRecord,
    pub date: PublishedDate,
}

/// Per-run extraction state: compiled date marker, parsed default date,
/// lower-cased tag needles.
#[derive(Debug, Clone)]
pub struct Extractor {
    date_marker: Regex,
    default_date: NaiveDate,
    categories: CategoryRules,
    tags: Vec<TagRule>,
}

impl Extractor {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let pattern = format!(
            r#"(?is)<span\s+class\s*=\s*["']{}["'][^>]*>(.*?)</span>"#,
            regex::escape(&config.date_marker_class)
        );
        let date_marker = Regex::new(&pattern)
            .map_err(|e| Error::Config(format!("bad date marker class: {}", e)))?;

        let tags = config
            .tags
            .iter()
            .map(|rule| TagRule {
                tag: rule.tag.trim().to_lowercase(),
                needles: rule.needles.iter().map(|n| n.to_lowercase()).collect(),
            })
            .collect();

        Ok(Self {
            date_marker,
            default_date: config.default_date()?,
            categories: config.categories.clone(),
            tags,
        })
    }

    /// Read and extract one file. `root` is the site root the URL is relative to.
    pub fn extract_file(&self, root: &Path, path: &Path) -> std::result::Result<Extracted, Skipped> {
        let html = fs::read_to_string(path).map_err(|e| Skipped {
            path: path.to_path_buf(),
            reason: SkipReason::Unreadable(e),
        })?;
        let url = url_for(root, path);
        Ok(self.extract_html(&url, &html, || date::mtime_date(path)))
    }

    /// Extract from HTML already in memory.
    pub fn extract_html(
        &self,
        url: &str,
        html: &str,
        mtime: impl FnOnce() -> Option<NaiveDate>,
    ) -> Extracted {
        let title = extract_title(html);
        let excerpt = extract_description(html);
        let marker = self
            .date_marker
            .captures(html)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        let date = date::resolve(marker, mtime, self.default_date);
        let category = infer_category(url, &title, &self.categories);
        let tags = infer_tags(&html.to_lowercase(), &self.tags);

        Extracted {
            record: DocumentRecord {
                title,
                url: url.to_string(),
                category,
                tags,
                date: date.to_index_string(),
                excerpt,
            },
            date,
        }
    }
}

/// First `<title>` content, trimmed and entity-decoded, or `"Untitled"`.
pub fn extract_title(html: &str) -> String {
    TITLE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| collapse_whitespace(&decode_entities(m.as_str())))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// First description meta content, or `""`.
pub fn extract_description(html: &str) -> String {
    DESCRIPTION
        .captures(html)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| collapse_whitespace(&decode_entities(m.as_str())))
        .unwrap_or_default()
}

/// Classify by URL path, then exact landing page, then title keyword.
pub fn infer_category(url: &str, title: &str, rules: &CategoryRules) -> Category {
    if let Some(rule) = rules.paths.iter().find(|r| r.matches(url)) {
        return rule.category;
    }
    if let Some(rule) = rules.pages.iter().find(|r| r.url == url) {
        return rule.category;
    }
    let title = title.to_lowercase();
    rules
        .titles
        .iter()
        .find(|r| title.contains(&r.keyword.to_lowercase()))
        .map(|r| r.category)
        .unwrap_or_default()
}

/// Vocabulary hits in `text_lower`, sorted, deduplicated, first [`MAX_TAGS`] kept.
pub fn infer_tags(text_lower: &str, vocabulary: &[TagRule]) -> Vec<String> {
    let hits: BTreeSet<&str> = vocabulary
        .iter()
        .filter(|rule| rule.matches(text_lower))
        .map(|rule| rule.tag.as_str())
        .collect();
    hits.into_iter().take(MAX_TAGS).map(str::to_string).collect()
}

/// Site-relative URL: forward slashes, exactly one leading slash.
pub fn url_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    format!("/{}", parts.join("/"))
}

/// Normalize a path-like string into URL form: `.\a\b.html` → `/a/b.html`.
pub fn normalize_url(raw: &str) -> String {
    let forward = raw.replace('\\', "/");
    let mut rest = forward.as_str();
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            break;
        }
    }
    format!("/{}", rest)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode the handful of entities that show up in titles and descriptions.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
