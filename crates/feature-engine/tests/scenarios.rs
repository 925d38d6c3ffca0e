use feature_engine::{
    CharacterConfig, CharacterFeatures, ClassTable, Encoding, FeatureExtractor, LexicalRichness,
    TextSource,
};
use std::io::Write;

const EPS: f64 = 1e-12;

fn close(actual: Option<f64>, expected: f64) -> bool {
    actual.map(|a| (a - expected).abs() < EPS).unwrap_or(false)
}

#[test]
fn repeated_word_document() {
    let features = LexicalRichness::default().compute_all("a a b");

    assert_eq!(features.value("WordCount"), Some(3.0));
    assert_eq!(features.value("VocabularySize"), Some(2.0));
    assert!(close(features.value("TypeTokenRatio"), 2.0 / 3.0));
    // one hapax type over three tokens
    assert!(close(features.value("HapaxLegomenaRatio"), 1.0 / 3.0));
    assert!(close(features.value("HapaxDislegomenaRatio"), 1.0 / 3.0));
    assert!(close(features.value("LengthRatio-1"), 1.0));
    assert!(close(features.value("AverageWordLength"), 1.0));
}

#[test]
fn empty_document_has_no_lexical_groups() {
    let features = LexicalRichness::default().compute_all("");
    assert!(features.is_empty());
}

#[test]
fn fallback_character_profile() {
    let features = CharacterFeatures::default().compute_all("ab ab");
    assert_eq!(features.value("ws"), Some(0.25));
    assert_eq!(features.value("R:a"), Some(0.5));
    assert_eq!(features.value("R:b"), Some(0.5));
}

#[test]
fn punctuation_class_ratios() {
    let table = ClassTable::parse("punctuation\t. ,\nlower\ta b c\n").unwrap();
    let engine = CharacterFeatures::with_classes(CharacterConfig::default(), table).unwrap();
    let features = engine.compute_all("Hi, Bob.");

    let m = 7.0;
    assert!(close(features.value("R:,"), 1.0 / m));
    assert!(close(features.value("R:."), 1.0 / m));
}

#[test]
fn rupet_k_is_zero_at_ten_tokens() {
    let engine = LexicalRichness::default();
    for text in [
        "a b c d e f g h i j",
        "a a b b c c d d e e",
        "a a a a a a a a a b",
    ] {
        let features = engine.compute_all(text);
        assert_eq!(features.value("WordCount"), Some(10.0));
        assert_eq!(features.value("RupetK"), Some(0.0));
    }
}

#[test]
fn short_word_ratio_matches_length_buckets() {
    let features = LexicalRichness::default()
        .compute_all("I am the walrus and you are the eggman goo goo g'joob");
    let buckets: f64 = (1..=3)
        .map(|l| features.value(&format!("LengthRatio-{l}")).unwrap())
        .sum();
    assert!(close(features.value("ShortWordRatio"), buckets));
}

#[test]
fn file_backed_document() {
    let mut doc = tempfile::NamedTempFile::new().unwrap();
    write!(doc, "ab ab").unwrap();

    let extractor = FeatureExtractor::default();
    let source = TextSource::Path(doc.path().to_path_buf());
    let features = extractor.extract(&source).unwrap();
    assert_eq!(features.value("WordCount"), Some(2.0));
    assert_eq!(features.value("ws"), Some(0.25));

    let from_lexical = LexicalRichness::default().compute_source(&source, Encoding::Utf8);
    assert_eq!(from_lexical.value("VocabularySize"), Some(1.0));
}

#[test]
fn latin1_document_uses_character_encoding() {
    let mut doc = tempfile::NamedTempFile::new().unwrap();
    doc.write_all(&[b'c', b'a', b'f', 0xE9, b' ', b'x']).unwrap();
    let source = TextSource::Path(doc.path().to_path_buf());

    let utf8 = FeatureExtractor::default();
    assert!(utf8.extract(&source).is_err());

    let config = CharacterConfig {
        encoding: Encoding::Latin1,
    };
    let character = CharacterFeatures::fallback(config);
    let latin1 = FeatureExtractor::new(LexicalRichness::default(), character);
    let features = latin1.extract(&source).unwrap();
    assert_eq!(features.value("AverageWordLength"), Some(2.5));
    assert_eq!(features.value("R:\u{e9}"), Some(0.2));
}

#[test]
fn class_table_from_file() {
    let mut defs = tempfile::NamedTempFile::new().unwrap();
    writeln!(defs, "punctuation\t. , ;").unwrap();
    writeln!(defs).unwrap();
    writeln!(defs, "lower\ta b c d e f g h i j k l m n o p q r s t u v w x y z").unwrap();
    writeln!(defs, "digits\t0 1 2 3 4 5 6 7 8 9").unwrap();

    let table = ClassTable::from_path(defs.path()).unwrap();
    let engine = CharacterFeatures::with_classes(CharacterConfig::default(), table).unwrap();
    let features = engine.compute_all("Room 101; floor 1.");

    // R o o m 1 0 1 ; f l o o r 1 . -> M = 15
    assert!(close(features.value("digits"), 4.0 / 15.0));
    assert!(close(features.value("R:;"), 1.0 / 15.0));
    assert!(close(features.value("alpha"), 9.0 / 15.0));
    assert!(close(features.value("R:o"), 4.0 / 15.0));
}
