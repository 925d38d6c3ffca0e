//! Lexical Richness Engine
//!
//! Derives vocabulary, word-length and frequency-spectrum features from a
//! document's token sequence. Every metric group is omitted entirely when
//! there are no tokens.

mod profile;
mod richness;
mod spectrum;

pub use profile::TokenProfile;
pub(crate) use profile::ratio;
pub use richness::RichnessMeasures;
pub use spectrum::SpectrumMeasures;

use crate::config::LexicalConfig;
use crate::error::ConfigError;
use crate::vector::FeatureVector;
use tokenizer::{is_alphabetic_word, split_whitespace, tokenize, Encoding, TextSource};
use tracing::{debug, warn};

/// Lexical feature engine
#[derive(Debug, Clone, Default)]
pub struct LexicalRichness {
    config: LexicalConfig,
}

impl LexicalRichness {
    /// Create an engine with validated configuration
    pub fn new(config: LexicalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compute every metric group for a document source
    ///
    /// A source that cannot be tokenized yields no features.
    pub fn compute_source(&self, source: &TextSource, encoding: Encoding) -> FeatureVector {
        match tokenize(source, encoding) {
            Ok(tokens) => self.compute_tokens(&tokens),
            Err(e) => {
                warn!("Treating document as empty: {}", e);
                FeatureVector::new()
            }
        }
    }

    /// Compute every metric group for raw document text
    pub fn compute_all(&self, document: &str) -> FeatureVector {
        self.compute_tokens(&split_whitespace(document))
    }

    /// Compute every metric group for a pre-split token sequence
    pub fn compute_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> FeatureVector {
        let profile = self.profile(tokens);
        let mut features = FeatureVector::new();
        features.merge(self.basic_counts(&profile));
        features.merge(self.type_token_metrics(&profile));
        features.merge(self.length_metrics(&profile));
        features.merge(self.length_ratio_metrics(&profile));
        features.merge(self.spectrum_metrics(&profile));
        features.merge(self.frequency_ratio_metrics(&profile));
        debug!(
            "Lexical features: N={}, V={}, {} features",
            profile.n(),
            profile.v(),
            features.len()
        );
        features
    }

    /// Build frequency tables, applying the alphabetic filter if configured
    pub fn profile<S: AsRef<str>>(&self, tokens: &[S]) -> TokenProfile {
        if self.config.alphabetic_only {
            let words: Vec<&str> = tokens
                .iter()
                .map(|t| t.as_ref())
                .filter(|t| is_alphabetic_word(t))
                .collect();
            debug!("Alphabetic filter kept {}/{} tokens", words.len(), tokens.len());
            TokenProfile::from_tokens(&words)
        } else {
            TokenProfile::from_tokens(tokens)
        }
    }

    /// `WordCount` and `VocabularySize`
    pub fn basic_counts(&self, profile: &TokenProfile) -> FeatureVector {
        let mut features = FeatureVector::new();
        if profile.is_empty() {
            return features;
        }
        features.insert("WordCount", profile.n() as u64);
        features.insert("VocabularySize", profile.v() as u64);
        features
    }

    /// Vocabulary-size transforms of N and V
    pub fn type_token_metrics(&self, profile: &TokenProfile) -> FeatureVector {
        let mut features = FeatureVector::new();
        if profile.is_empty() {
            return features;
        }
        for (name, value) in RichnessMeasures::compute(profile).named() {
            features.insert(name, value);
        }
        features
    }

    /// `AverageWordLength` over all token occurrences
    pub fn length_metrics(&self, profile: &TokenProfile) -> FeatureVector {
        let mut features = FeatureVector::new();
        if profile.is_empty() {
            return features;
        }
        features.insert(
            "AverageWordLength",
            profile.total_length as f64 / profile.n() as f64,
        );
        features
    }

    /// `ShortWordRatio` and one `LengthRatio-<L>` per configured length
    pub fn length_ratio_metrics(&self, profile: &TokenProfile) -> FeatureVector {
        let mut features = FeatureVector::new();
        if profile.is_empty() {
            return features;
        }
        let ratios = profile.length_ratios();
        let share = |len: usize| ratios.get(&len).copied().unwrap_or(0.0);

        let short: f64 = self.config.short_word_range.lengths().map(share).sum();
        features.insert("ShortWordRatio", short);

        for len in self.config.length_ratio_range.lengths() {
            features.insert(format!("LengthRatio-{len}"), share(len));
        }
        features
    }

    /// Statistics over the frequency spectrum
    pub fn spectrum_metrics(&self, profile: &TokenProfile) -> FeatureVector {
        let mut features = FeatureVector::new();
        if profile.is_empty() {
            return features;
        }
        for (name, value) in SpectrumMeasures::compute(profile).named() {
            features.insert(name, value);
        }
        features
    }

    /// Hapax legomena and dislegomena as shares of N
    pub fn frequency_ratio_metrics(&self, profile: &TokenProfile) -> FeatureVector {
        let mut features = FeatureVector::new();
        if profile.is_empty() {
            return features;
        }
        let ratios = profile.spectrum_ratios();
        features.insert(
            "HapaxLegomenaRatio",
            ratios.get(&1).copied().unwrap_or(0.0),
        );
        features.insert(
            "HapaxDislegomenaRatio",
            ratios.get(&2).copied().unwrap_or(0.0),
        );
        features
    }
}
