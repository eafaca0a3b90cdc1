//! Shared test utilities and fixtures.

#![allow(dead_code)]

use chrono::{Local, TimeZone};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

use satchel::DocumentRecord;

// Re-export canonical test utilities from satchel::testing
pub use satchel::testing::{bag_collection, make_page, make_record, make_tagged_record};

/// Write `html` to `root/rel`, creating parent directories.
pub fn write_page(root: &Path, rel: &str, html: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, html).unwrap();
    path
}

/// Set a file's modification time to local noon on the given day.
pub fn set_mtime(path: &Path, y: i32, m: u32, d: u32) {
    let local = Local.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap();
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::from(local)).unwrap();
}

/// A small site with one page per scanner rule worth exercising.
///
/// Indexed (newest first):
/// - `/articles/tote-bags/osprey-travel.html`     2025-03-01 (marker)
/// - `/articles/wallets/classic-leather.html`     2025-02-01 (marker)
/// - `/articles/backpacks/osprey-hiking.html`     2025-01-10 (marker)
/// - `/categories/wallets/index.html`             2024-12-01 (marker)
/// - `/index.html`                                2024-06-15 (mtime)
///
/// Not indexed: a backup copy, a hidden draft, a page under `node_modules`,
/// a stylesheet, and a page outside the included directories.
pub fn bag_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write_page(
        root,
        "articles/backpacks/osprey-hiking.html",
        &make_page(
            Some("Osprey Hiking Backpack"),
            Some("Trail-tested daypack"),
            Some("January 10, 2025"),
            "Carries water and snacks.",
        ),
    );
    write_page(
        root,
        "articles/wallets/classic-leather.html",
        &make_page(
            Some("Classic Leather Wallet"),
            Some("Slim bifold"),
            Some("February 1, 2025"),
            "Full-grain leather.",
        ),
    );
    write_page(
        root,
        "articles/tote-bags/osprey-travel.html",
        &make_page(
            Some("Osprey Travel Tote"),
            Some("Carry-on companion"),
            Some("March 1, 2025"),
            "Fits a laptop.",
        ),
    );
    write_page(
        root,
        "categories/wallets/index.html",
        &make_page(Some("Wallets"), None, Some("December 1, 2024"), "All wallets."),
    );
    let home = write_page(root, "index.html", &make_page(Some("Bag Reviews"), None, None, "Welcome."));
    set_mtime(&home, 2024, 6, 15);

    write_page(
        root,
        "articles/backpacks/osprey-hiking.bak_20240101.html",
        &make_page(Some("Old Copy"), None, Some("January 1, 2024"), ""),
    );
    write_page(root, "articles/.draft.html", &make_page(Some("Draft"), None, None, ""));
    write_page(
        root,
        "articles/node_modules/pkg/readme.html",
        &make_page(Some("Vendored"), None, None, ""),
    );
    write_page(root, "articles/style.css", "body { color: black; }");
    write_page(root, "drafts/unlisted.html", &make_page(Some("Unlisted"), None, None, ""));

    dir
}

pub fn titles(records: &[&DocumentRecord]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

pub fn owned_titles(records: &[DocumentRecord]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}
