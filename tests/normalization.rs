//! Properties of the lexical normalizer and the intent classifier.

use sitebot::intent::{IntentClassifier, KeywordIntentClassifier, TopicIntent};
use sitebot::spelling::{LexicalNormalizer, Vocabulary};

#[test]
fn test_correct_text_is_unchanged() {
    let normalizer = LexicalNormalizer::new();
    assert_eq!(
        normalizer.normalize("internship schedule"),
        "internship schedule"
    );

    for term in Vocabulary::builtin().iter() {
        assert_eq!(normalizer.normalize(&term.canonical), term.canonical);
    }
}

#[test]
fn test_every_variant_maps_to_its_term() {
    let normalizer = LexicalNormalizer::new();
    for term in Vocabulary::builtin().iter() {
        for variant in &term.variants {
            let normalized = normalizer.normalize(&format!("{variant} details"));
            assert!(
                normalized.contains(&term.canonical),
                "{variant} normalized to {normalized}"
            );
        }
    }
}

#[test]
fn test_normalize_is_idempotent() {
    let normalizer = LexicalNormalizer::new();
    for text in [
        "i want to do intenship",
        "wht is brainovison",
        "pythn corse with stiped",
        "zzqx flumox ping",
    ] {
        let once = normalizer.normalize(text);
        assert_eq!(normalizer.normalize(&once), once);
    }
}

#[test]
fn test_blank_text_has_no_intent() {
    let classifier = KeywordIntentClassifier::new();
    assert!(classifier.classify("").is_none());
    assert!(classifier.classify("   ").is_none());
}

#[test]
fn test_classification_is_deterministic() {
    let normalizer = LexicalNormalizer::new();
    let classifier = KeywordIntentClassifier::new();
    let text = normalizer.normalize("tell me about machin lerning and data science");

    let first = classifier.classify(&text);
    for _ in 0..10 {
        assert_eq!(classifier.classify(&text), first);
    }
    assert!(first.is_some());
}

#[test]
fn test_misspelled_program_names() {
    let normalizer = LexicalNormalizer::new();
    let classifier = KeywordIntentClassifier::new();

    let result = classifier
        .classify(&normalizer.normalize("jaava spring"))
        .unwrap();
    assert_eq!(result.intent, TopicIntent::Java);
    assert_eq!(result.score, 4);
}
