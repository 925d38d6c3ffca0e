use feature_engine::{CharacterFeatures, FeatureVector, LexicalRichness};
use proptest::prelude::*;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,40}|[,.;!?]{1,2}|[0-9]{1,3}", 0..120)
}

fn value(features: &FeatureVector, name: &str) -> f64 {
    features.value(name).unwrap()
}

proptest! {
    #[test]
    fn type_token_ratio_is_bounded(tokens in words()) {
        let features = LexicalRichness::default().compute_tokens(&tokens);
        if tokens.is_empty() {
            prop_assert!(features.is_empty());
        } else {
            let ttr = value(&features, "TypeTokenRatio");
            prop_assert!(ttr > 0.0 && ttr <= 1.0);
            prop_assert!(value(&features, "VocabularySize") <= value(&features, "WordCount"));
        }
    }

    #[test]
    fn length_ratios_sum_to_one(tokens in words()) {
        prop_assume!(!tokens.is_empty());
        let features = LexicalRichness::default().compute_tokens(&tokens);
        let total: f64 = (1..=30)
            .map(|l| value(&features, &format!("LengthRatio-{l}")))
            .sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn short_word_ratio_is_first_three_buckets(tokens in words()) {
        prop_assume!(!tokens.is_empty());
        let features = LexicalRichness::default().compute_tokens(&tokens);
        let buckets: f64 = (1..=3)
            .map(|l| value(&features, &format!("LengthRatio-{l}")))
            .sum();
        prop_assert!((value(&features, "ShortWordRatio") - buckets).abs() < 1e-12);
    }

    #[test]
    fn lexical_features_are_deterministic(tokens in words()) {
        let engine = LexicalRichness::default();
        prop_assert_eq!(engine.compute_tokens(&tokens), engine.compute_tokens(&tokens));
    }

    #[test]
    fn guarded_measures_are_finite(tokens in words()) {
        let features = LexicalRichness::default().compute_tokens(&tokens);
        for name in ["TypeTokenRatio", "MeanWordFrequency", "GuiraudR", "HerdanC", "RupetK",
                     "MaasA", "DugastU", "LukjanenkovNeistoj", "SichelS", "MicheaM",
                     "Entropy", "YuleK", "SimpsonD", "HerdanV"] {
            if let Some(v) = features.value(name) {
                prop_assert!(v.is_finite(), "{} = {}", name, v);
            }
        }
    }

    #[test]
    fn character_ratios_are_sane(text in "[a-c ,.\t\n]{0,80}") {
        let features = CharacterFeatures::default().compute_all(&text);
        let non_space = text.chars().filter(|c| !c.is_whitespace()).count();
        for (name, v) in features.iter() {
            let v = v.as_f64();
            prop_assert!(v.is_finite() && v >= 0.0, "{} = {}", name, v);
            if non_space == 0 {
                prop_assert_eq!(v, 0.0);
            }
        }
    }

    #[test]
    fn character_features_are_deterministic(text in "\\PC{0,100}") {
        let engine = CharacterFeatures::default();
        prop_assert_eq!(engine.compute_all(&text), engine.compute_all(&text));
    }
}
