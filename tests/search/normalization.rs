//! Accent folding and URL inclusion.

use super::common::{make_tagged_record, titles};
use satchel::search::{SearchOutcome, Searcher};
use satchel::{Category, IndexCollection, QueryConfig};

fn spanish_collection() -> IndexCollection {
    let mut guide = make_tagged_record(
        "Guía de artículos de piel",
        Category::Wallets,
        &["carteras"],
        "2025-02-01",
    );
    guide.url = "/es/articulos/carteras/guia-piel.html".to_string();
    guide.excerpt = "Organización y estilo".to_string();

    let mut backpacks = make_tagged_record("Mochilas", Category::Backpacks, &["mochilas"], "2025-01-01");
    backpacks.url = "/es/articulos/mochilas/index.html".to_string();

    IndexCollection::from_records(vec![guide, backpacks])
}

#[test]
fn test_accents_must_match_by_default() {
    let collection = spanish_collection();
    let searcher = Searcher::new(&collection, QueryConfig::default());
    assert!(searcher.search("articulos").is_no_matches());
    assert_eq!(
        titles(&searcher.search("artículos").records()),
        vec!["Guía de artículos de piel"]
    );
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_fold_diacritics_matches_both_ways() {
    let collection = spanish_collection();
    let config = QueryConfig {
        fold_diacritics: true,
        ..QueryConfig::default()
    };
    let searcher = Searcher::new(&collection, config);

    for query in ["articulos", "artículos", "ORGANIZACION", "guia"] {
        assert_eq!(
            titles(&searcher.search(query).records()),
            vec!["Guía de artículos de piel"],
            "query {query:?}"
        );
    }
}

#[test]
fn test_include_url() {
    let collection = spanish_collection();
    let without = Searcher::new(&collection, QueryConfig::default());
    assert!(without.search("/es/").is_no_matches());

    let with = Searcher::new(
        &collection,
        QueryConfig {
            include_url: true,
            ..QueryConfig::default()
        },
    );
    assert_eq!(with.search("/es/").len(), 2);
    assert_eq!(
        titles(&with.search("guia-piel").records()),
        vec!["Guía de artículos de piel"]
    );
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_query_of_only_combining_marks_is_empty_when_folding() {
    let collection = spanish_collection();
    let folding = Searcher::new(
        &collection,
        QueryConfig {
            fold_diacritics: true,
            ..QueryConfig::default()
        },
    );
    assert!(matches!(folding.search("\u{0301} \u{0303}"), SearchOutcome::EmptyQuery));
    assert!(satchel::search::parse_query("\u{0301}", true).is_empty());

    let plain = Searcher::new(&collection, QueryConfig::default());
    assert!(!matches!(plain.search("\u{0301}"), SearchOutcome::EmptyQuery));
}
