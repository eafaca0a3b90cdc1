//! End-to-end tests for the build workflow.

use super::common::{bag_site, owned_titles, write_page};
use satchel::build::{run_build, BuildConfig, DEFAULT_INDEX_FILE};
use satchel::index::store;
use satchel::{search, Category};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_run_build_e2e_basic() {
    let site = bag_site();
    let config = BuildConfig::new(site.path());

    let report = run_build(&config).unwrap();

    assert_eq!(report.files_found, 5);
    assert_eq!(report.records, 5);
    assert!(report.skipped.is_empty());
    assert_eq!(report.dates.parsed, 4);
    assert_eq!(report.dates.from_mtime, 1);

    let written = report.written;
    assert_eq!(written.path, site.path().join(DEFAULT_INDEX_FILE));
    let bytes = fs::read(&written.path).unwrap();
    assert_eq!(written.bytes, bytes.len());
    assert_eq!(written.crc32, crc32fast::hash(&bytes));
}

#[test]
fn test_run_build_output_sorted_newest_first() {
    let site = bag_site();
    let report = run_build(&BuildConfig::new(site.path())).unwrap();
    let collection = store::load(&report.written.path).unwrap();

    assert!(collection.is_sorted_newest_first());
    assert_eq!(
        owned_titles(collection.records()),
        vec![
            "Osprey Travel Tote",
            "Classic Leather Wallet",
            "Osprey Hiking Backpack",
            "Wallets",
            "Bag Reviews",
        ]
    );
    let dates: Vec<_> = collection.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2025-03-01", "2025-02-01", "2025-01-10", "2024-12-01", "2024-06-15"]
    );
}

#[test]
fn test_run_build_records_carry_categories_and_tags() {
    let site = bag_site();
    let report = run_build(&BuildConfig::new(site.path())).unwrap();
    let collection = store::load(&report.written.path).unwrap();

    let find = |url: &str| collection.iter().find(|r| r.url == url).unwrap();

    let hiking = find("/articles/backpacks/osprey-hiking.html");
    assert_eq!(hiking.category, Category::Backpacks);
    assert_eq!(hiking.tags, vec!["backpack", "hiking", "osprey"]);
    assert_eq!(hiking.excerpt, "Trail-tested daypack");

    let tote = find("/articles/tote-bags/osprey-travel.html");
    assert_eq!(tote.category, Category::ToteBags);
    assert_eq!(tote.tags, vec!["laptop", "osprey", "tote", "travel"]);

    assert_eq!(find("/categories/wallets/index.html").category, Category::Wallets);
    assert_eq!(find("/index.html").category, Category::Homepage);
}

#[test]
fn test_tied_dates_keep_scan_order() {
    let dir = TempDir::new().unwrap();
    let page = |title: &str| {
        format!(
            "<title>{}</title><span class=\"article-meta\">April 4, 2025</span>",
            title
        )
    };
    write_page(dir.path(), "articles/c.html", &page("Gamma"));
    write_page(dir.path(), "articles/a.html", &page("Alpha"));
    write_page(dir.path(), "articles/b.html", &page("Beta"));

    let report = run_build(&BuildConfig::new(dir.path())).unwrap();
    let collection = store::load(&report.written.path).unwrap();
    assert_eq!(owned_titles(collection.records()), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_build_then_search() {
    let site = bag_site();
    let report = run_build(&BuildConfig::new(site.path())).unwrap();
    let collection = store::load(&report.written.path).unwrap();

    let titles: Vec<_> = search(&collection, "osprey")
        .iter()
        .map(|r| r.title.clone())
        .collect();
    assert_eq!(titles, vec!["Osprey Travel Tote", "Osprey Hiking Backpack"]);
    assert!(search(&collection, "osprey wallet").is_empty());
}

#[test]
fn test_rebuild_is_byte_identical() {
    let site = bag_site();
    let config = BuildConfig::new(site.path());
    let first = run_build(&config).unwrap().written;
    let first_bytes = fs::read(&first.path).unwrap();

    let second = run_build(&config).unwrap().written;
    assert_eq!(fs::read(&second.path).unwrap(), first_bytes);
    assert_eq!(first.crc32, second.crc32);
}

#[test]
fn test_unreadable_page_is_skipped_not_fatal() {
    let site = bag_site();
    // Invalid UTF-8 can't be read as a string
    fs::write(site.path().join("articles/binary.html"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let report = run_build(&BuildConfig::new(site.path())).unwrap();
    assert_eq!(report.files_found, 6);
    assert_eq!(report.records, 5);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].path.ends_with("articles/binary.html"));
}

#[test]
fn test_missing_root_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = BuildConfig::new(dir.path().join("no-such-site"));
    assert!(run_build(&config).is_err());
}
