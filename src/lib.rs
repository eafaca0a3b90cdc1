// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search index builder and ranked query engine for a static review site.
//!
//! At build time the scanner walks the site's HTML pages, pulls a small
//! record out of each one (title, URL, category, tags, date, excerpt) and
//! writes them, newest first, to a single JSON file. At query time the
//! engine loads that file and ranks records against what the user typed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ build::scan  │────▶│build::extract│────▶│     index     │
//! │ (discover,   │     │ (title, date,│     │ (collection,  │
//! │  filter)     │     │  category,   │     │  store: JSON, │
//! │              │     │  tags)       │     │  atomic write)│
//! └──────────────┘     └──────────────┘     └───────────────┘
//!                                                  │
//!                                                  ▼
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │    browse    │◀────│    search    │────▶│    scoring    │
//! │ (categories, │     │ (Searcher,   │     │ (weights,     │
//! │  pages,      │     │  outcome)    │     │  AND + fuzzy, │
//! │  fallback)   │     │              │     │  ranking)     │
//! └──────────────┘     └──────────────┘     └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use satchel::build::{run_build, BuildConfig};
//! use satchel::index::store;
//!
//! let report = run_build(&BuildConfig::new("site"))?;
//! let collection = store::load(std::path::Path::new("site/search-index.json"))?;
//! for record in satchel::search(&collection, "osprey backpack") {
//!     println!("{} {}", record.date, record.title);
//! }
//! ```

pub mod browse;
pub mod build;
pub mod config;
pub mod error;
pub mod index;
pub mod scoring;
pub mod search;
pub mod types;

#[doc(hidden)]
pub mod testing;

pub use build::{run_build, BuildConfig, BuildReport};
pub use config::{QueryConfig, ScanConfig};
pub use error::{Error, Result};
pub use index::IndexCollection;
pub use scoring::ScoringWeights;
pub use search::{search, SearchHit, SearchOutcome, Searcher};
pub use types::{Category, DocumentRecord};
