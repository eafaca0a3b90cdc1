// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Finding the pages to index.
//!
//! Walks each included directory in file-name order, then appends the
//! top-level pages. The order matters: it is the tie-breaker when two pages
//! share a publication date, so it has to be the same on every machine.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;

/// Every file under `root` that the scanner should extract, in scan order.
///
/// Missing include directories are not an error; a site without
/// `categories/` simply contributes nothing from there. Unreadable
/// directory entries are logged and skipped.
pub fn discover(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for dir in &config.include_dirs {
        let dir_path = root.join(dir);
        if !dir_path.is_dir() {
            tracing::debug!(dir = %dir_path.display(), "include dir not found");
            continue;
        }

        let walker = WalkDir::new(&dir_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !pruned(e, config));

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    let path = entry.into_path();
                    if is_candidate(root, &path, config) && seen.insert(path.clone()) {
                        files.push(path);
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "skipping unreadable entry"),
            }
        }
    }

    for name in &config.include_files {
        let path = root.join(name);
        if path.is_file() && is_candidate(root, &path, config) && seen.insert(path.clone()) {
            files.push(path);
        }
    }

    files
}

/// True if `path` looks like a content page: right extension, not hidden,
/// not a backup copy.
///
/// The backup marker is only looked for below `root`, so a site restored
/// into `site.bak_2025/` still indexes.
pub fn is_candidate(root: &Path, path: &Path, config: &ScanConfig) -> bool {
    let Some(name) = path.file_name().and_then(OsStr::to_str) else {
        return false;
    };
    if is_hidden_name(name) {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(Path::new(name));
    if !config.backup_marker.is_empty()
        && relative.to_string_lossy().contains(&config.backup_marker)
    {
        return false;
    }
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(config.extension()))
}

/// Hidden entries and excluded directories are never descended into.
fn pruned(entry: &DirEntry, config: &ScanConfig) -> bool {
    let name = entry.file_name().to_string_lossy();
    if is_hidden_name(&name) {
        return true;
    }
    entry.file_type().is_dir() && config.exclude_dirs.iter().any(|d| d.as_str() == name)
}

fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
