//! Ranking tiers and their precedence.

use super::common::{make_record, make_tagged_record, titles};
use satchel::scoring::{score_candidate, ParsedQuery};
use satchel::search::{parse_query, Searcher};
use satchel::{Category, IndexCollection, QueryConfig, ScoringWeights};

fn score(content: &str, title: &str, query: &str) -> Option<f64> {
    let parsed: ParsedQuery = parse_query(query, false);
    score_candidate(content, title, &parsed, &ScoringWeights::default())
}

#[test]
fn test_title_phrase_beats_content_phrase() {
    let mut in_excerpt = make_record("Bag Guide", "2025-05-01");
    in_excerpt.excerpt = "Why a leather tote beats a backpack".to_string();
    let in_title = make_record("Leather Tote Guide", "2025-01-01");

    // The content-only match is newer, so only score can put the title match first
    let collection = IndexCollection::from_records(vec![in_excerpt, in_title]);
    let searcher = Searcher::new(&collection, QueryConfig::default());
    let hits = searcher.search("leather tote");

    assert_eq!(titles(&hits.records()), vec!["Leather Tote Guide", "Bag Guide"]);
    assert!(hits.hits()[0].score > hits.hits()[1].score);
}

#[test]
fn test_phrase_beats_scattered_tokens() {
    let phrase = score("red leather tote", "guide", "leather tote").unwrap();
    let scattered = score("leather red tote", "guide", "leather tote").unwrap();
    assert!(phrase > scattered);
    assert_eq!(phrase - scattered, ScoringWeights::default().phrase_in_content);
}

#[test]
fn test_token_in_title_beats_token_in_content() {
    let in_title = score("wallet guide", "wallet", "wallet").unwrap();
    let in_content = score("wallet guide", "guide", "wallet").unwrap();
    assert!(in_title > in_content);
}

#[test]
fn test_exact_score_of_single_title_word() {
    // phrase in content 100 + phrase in title 50 + token in title 20
    // + all terms 30 + exact word similarity 1.0 * 10
    let s = score("osprey hiking backpack", "osprey hiking backpack", "osprey").unwrap();
    assert!((s - 210.0).abs() < 1e-9);
}

#[test]
fn test_fuzzy_bonus_only_for_close_words() {
    // "wallet" inside "wallets": similarity 6/7 ≈ 0.857 > 0.8
    let close = score("wallets", "x", "wallet").unwrap();
    // "tote" inside "totebagsandmore": far from any whole word
    let far = score("totebagsandmore", "x", "tote").unwrap();
    let base = 100.0 + 10.0 + 30.0;
    assert!((close - base - 10.0 * 6.0 / 7.0).abs() < 1e-9);
    assert!((far - base).abs() < 1e-9);
}

#[test]
fn test_custom_weights_change_order() {
    let a = make_tagged_record("Gucci Clutch", Category::Handbags, &["gucci"], "2025-01-01");
    let mut b = make_record("Evening Bags", "2025-02-01");
    b.excerpt = "A gucci clutch for the evening".to_string();
    let collection = IndexCollection::from_records(vec![a, b]);

    let default = Searcher::new(&collection, QueryConfig::default());
    assert_eq!(
        titles(&default.search("gucci clutch").records()),
        vec!["Gucci Clutch", "Evening Bags"]
    );

    // No title advantage: equal scores, newer record first
    let flat = QueryConfig {
        weights: ScoringWeights {
            phrase_in_title: 0.0,
            token_in_title: 10.0,
            ..ScoringWeights::default()
        },
        ..QueryConfig::default()
    };
    let searcher = Searcher::new(&collection, flat);
    assert_eq!(
        titles(&searcher.search("gucci clutch").records()),
        vec!["Evening Bags", "Gucci Clutch"]
    );
}

#[test]
fn test_default_weights_are_valid() {
    ScoringWeights::default().validate().unwrap();
    let broken = ScoringWeights {
        token_in_title: 5.0,
        ..ScoringWeights::default()
    };
    assert!(broken.validate().is_err());
}
