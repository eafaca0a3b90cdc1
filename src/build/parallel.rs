// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document extraction, in parallel when the `parallel` feature is on.
//!
//! Reading and regex-scanning a few hundred pages is embarrassingly parallel.
//! Rayon's indexed `par_iter().collect()` keeps input order, so the output is
//! identical to the sequential path and the date tie-break stays stable.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::path::{Path, PathBuf};
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use super::extract::{Extracted, Extractor, Skipped};

/// One entry per input file, in input order.
pub type ExtractOutcome = Result<Extracted, Skipped>;

/// Extract every file.
#[cfg(feature = "parallel")]
pub fn extract_documents(root: &Path, files: &[PathBuf], extractor: &Extractor) -> Vec<ExtractOutcome> {
    files
        .par_iter()
        .map(|path| extract_one(root, path, extractor))
        .collect()
}

/// Extract every file.
#[cfg(not(feature = "parallel"))]
pub fn extract_documents(root: &Path, files: &[PathBuf], extractor: &Extractor) -> Vec<ExtractOutcome> {
    files
        .iter()
        .map(|path| extract_one(root, path, extractor))
        .collect()
}

/// Extract every file with progress reporting.
#[cfg(feature = "parallel")]
pub fn extract_documents_with_progress(
    root: &Path,
    files: &[PathBuf],
    extractor: &Extractor,
    progress: &ProgressBar,
) -> Vec<ExtractOutcome> {
    let counter = AtomicUsize::new(0);
    let total = files.len();

    files
        .par_iter()
        .map(|path| {
            let outcome = extract_one(root, path, extractor);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            outcome
        })
        .collect()
}

/// Extract every file with progress reporting.
/// Non-parallel fallback (no progress).
#[cfg(not(feature = "parallel"))]
pub fn extract_documents_with_progress(
    root: &Path,
    files: &[PathBuf],
    extractor: &Extractor,
) -> Vec<ExtractOutcome> {
    extract_documents(root, files, extractor)
}

fn extract_one(root: &Path, path: &Path, extractor: &Extractor) -> ExtractOutcome {
    let outcome = extractor.extract_file(root, path);
    match &outcome {
        Ok(extracted) => tracing::debug!(
            path = %path.display(),
            title = %extracted.record.title,
            date = %extracted.record.date,
            "extracted"
        ),
        Err(skipped) => tracing::warn!(
            path = %skipped.path.display(),
            reason = %skipped.reason,
            "skipping document"
        ),
    }
    outcome
}
