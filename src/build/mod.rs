// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

pub mod date;
pub mod extract;
pub mod manifest;
pub mod parallel;
pub mod scan;

use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::index::{store, IndexCollection};
use crate::types::DocumentRecord;

pub use date::{DateTierCounts, PublishedDate};
pub use extract::{Extracted, Extractor, SkipReason, Skipped};
pub use manifest::*;
pub use parallel::*;

/// Index file name used when no output is configured.
pub const DEFAULT_INDEX_FILE: &str = "search-index.json";

/// Everything a build run needs.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Site root; URLs are relative to it.
    pub root: PathBuf,
    /// Index file to (re)write.
    pub output: PathBuf,
    pub scan: ScanConfig,
    /// Show a progress bar while extracting.
    pub progress: bool,
}

impl BuildConfig {
    /// Defaults: site vocabulary, `<root>/search-index.json`, no progress bar.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output: root.join(DEFAULT_INDEX_FILE),
            root,
            scan: ScanConfig::default(),
            progress: false,
        }
    }

    /// Apply a manifest: its scan settings, and its output path relative to the root.
    pub fn with_manifest(mut self, manifest: &InputManifest) -> Self {
        self.scan = manifest.scan.clone();
        if let Some(output) = &manifest.output {
            self.output = self.root.join(output);
        }
        self
    }
}

/// Scanner output: records in scan order plus everything that was skipped.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files_found: usize,
    pub records: Vec<DocumentRecord>,
    pub skipped: Vec<Skipped>,
    pub dates: DateTierCounts,
}

/// Where the index went and what it looks like on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIndex {
    pub path: PathBuf,
    pub bytes: usize,
    pub crc32: u32,
}

#[derive(Debug)]
pub struct BuildReport {
    pub files_found: usize,
    pub records: usize,
    pub skipped: Vec<Skipped>,
    pub dates: DateTierCounts,
    pub written: WrittenIndex,
}

/// Create a progress style for the extraction progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Discover and extract every page under `root`.
///
/// Per-page failures end up in `skipped`; only an unusable root or config
/// is an error.
pub fn scan_site(root: &Path, scan: &ScanConfig, progress: bool) -> Result<ScanResult> {
    if !root.is_dir() {
        return Err(Error::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "site root is not a directory"),
        ));
    }
    scan.validate()?;

    let extractor = Extractor::new(scan)?;
    let files = scan::discover(root, scan);
    tracing::info!(root = %root.display(), files = files.len(), "discovered pages");

    #[cfg(feature = "parallel")]
    let outcomes = if progress {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Scanning");
        pb.set_message("pages...");
        let outcomes = parallel::extract_documents_with_progress(root, &files, &extractor, &pb);
        pb.finish_with_message(format!("scanned {} pages", files.len()));
        outcomes
    } else {
        parallel::extract_documents(root, &files, &extractor)
    };

    #[cfg(not(feature = "parallel"))]
    let outcomes = {
        let _ = progress;
        parallel::extract_documents(root, &files, &extractor)
    };

    let mut result = ScanResult {
        files_found: files.len(),
        ..ScanResult::default()
    };
    for outcome in outcomes {
        match outcome {
            Ok(Extracted { record, date }) => {
                result.dates.record(date);
                result.records.push(record);
            }
            Err(skipped) => result.skipped.push(skipped),
        }
    }
    Ok(result)
}

/// Scan the site, sort newest first, and atomically replace the index file.
///
/// The index is regenerated from scratch on every run: a scan that yields no
/// records writes an empty array. A write failure aborts with an error and
/// leaves the previous index in place.
pub fn run_build(config: &BuildConfig) -> Result<BuildReport> {
    let ScanResult {
        files_found,
        records,
        skipped,
        dates,
    } = scan_site(&config.root, &config.scan, config.progress)?;

    if records.is_empty() {
        tracing::warn!(
            root = %config.root.display(),
            "no documents extracted; writing an empty index"
        );
    }

    let collection = IndexCollection::from_records(records);
    let bytes = store::save(&collection, &config.output)?;
    let written = WrittenIndex {
        path: config.output.clone(),
        bytes: bytes.len(),
        crc32: crc32fast::hash(&bytes),
    };

    tracing::info!(
        output = %written.path.display(),
        records = collection.len(),
        skipped = skipped.len(),
        bytes = written.bytes,
        "search index written"
    );
    if dates.defaulted > 0 {
        tracing::warn!(
            count = dates.defaulted,
            "pages dated with the configured default date"
        );
    }

    Ok(BuildReport {
        files_found,
        records: collection.len(),
        skipped,
        dates,
        written,
    })
}
