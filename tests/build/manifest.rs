//! Builds driven by a `satchel.json` manifest.

use super::common::{make_page, write_page};
use satchel::build::{run_build, BuildConfig, InputManifest};
use satchel::index::store;
use satchel::{Category, Searcher};
use std::fs;
use tempfile::TempDir;

const SPANISH_MANIFEST: &str = r#"{
    "version": 1,
    "output": "public/indice.json",
    "scan": {
        "includeDirs": ["es/articulos"],
        "includeFiles": [],
        "defaultDate": "2024-01-01",
        "categories": {
            "paths": [
                {"fragment": "/es/articulos/mochilas", "category": "Backpacks"},
                {"fragment": "/es/articulos/carteras", "category": "Wallets"}
            ]
        },
        "tags": [
            {"tag": "trabajo"},
            {"tag": "luxury", "needles": ["lujo"]}
        ]
    }
}"#;

#[test]
fn test_manifest_driven_build() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_page(
        root,
        "es/articulos/mochilas/trabajo.html",
        &make_page(
            Some("Mochilas para el trabajo"),
            Some("Las mejores mochilas de lujo"),
            Some("March 3, 2025"),
            "",
        ),
    );
    write_page(
        root,
        "es/articulos/carteras/guia.html",
        &make_page(Some("Guía de carteras"), None, Some("February 2, 2025"), ""),
    );
    // Default include dirs are replaced, not extended
    write_page(root, "articles/ignored.html", &make_page(Some("Ignored"), None, None, ""));
    let manifest_path = root.join("satchel.json");
    fs::write(&manifest_path, SPANISH_MANIFEST).unwrap();

    let manifest = InputManifest::load(&manifest_path).unwrap();
    let config = BuildConfig::new(root).with_manifest(&manifest);
    let report = run_build(&config).unwrap();

    let written = report.written;
    assert_eq!(written.path, root.join("public/indice.json"));

    let collection = store::load(&written.path).unwrap();
    assert_eq!(collection.len(), 2);
    let first = &collection.records()[0];
    assert_eq!(first.title, "Mochilas para el trabajo");
    assert_eq!(first.category, Category::Backpacks);
    assert_eq!(first.tags, vec!["luxury", "trabajo"]);
    assert_eq!(collection.records()[1].category, Category::Wallets);
    assert_eq!(collection.records()[1].title, "Guía de carteras");
}

#[test]
fn test_manifest_query_section_drives_search() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write_page(
        root,
        "es/articulos/carteras/guia.html",
        &make_page(Some("Guía de carteras"), None, Some("February 2, 2025"), ""),
    );
    let manifest_path = root.join("satchel.json");
    fs::write(&manifest_path, SPANISH_MANIFEST).unwrap();
    let manifest = InputManifest::load(&manifest_path).unwrap();
    let report = run_build(&BuildConfig::new(root).with_manifest(&manifest)).unwrap();
    let collection = store::load(&report.written.path).unwrap();

    // "guia" only appears unaccented in the URL
    let plain = Searcher::new(&collection, manifest.query.clone());
    assert!(plain.search("guia").is_no_matches());

    fs::write(&manifest_path, r#"{"query": {"includeUrl": true, "limit": 1}}"#).unwrap();
    let query = InputManifest::load(&manifest_path).unwrap().query;
    assert!(query.include_url);
    let searcher = Searcher::new(&collection, query.with_overrides(false, false, None));
    let outcome = searcher.search("guia");
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.records()[0].title, "Guía de carteras");
}

#[test]
fn test_invalid_manifest_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("satchel.json");
    fs::write(&path, r#"{"scan": {"defaultDate": "soon"}}"#).unwrap();
    assert!(InputManifest::load(&path).is_err());

    fs::write(&path, r#"{"query": {"weights": {"phraseInTitle": 500}}}"#).unwrap();
    assert!(InputManifest::load(&path).is_err());
}
