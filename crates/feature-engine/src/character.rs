//! Character Feature Engine
//!
//! Ratios of character-class membership over the non-whitespace code points
//! of a document, or a raw per-character frequency profile when no class
//! table is configured.

use crate::config::CharacterConfig;
use crate::lexical::ratio;
use crate::vector::FeatureVector;
use char_classes::{reserved, ClassDefinitionError, ClassTable};
use std::collections::BTreeMap;
use tokenizer::{TextSource, TokenizeError};
use tracing::debug;

/// Built-in whitespace kinds reported individually
pub const SPACE_TYPES: [(&str, char); 3] = [("space", ' '), ("tab", '\t'), ("newline", '\n')];

/// Code-point frequencies of one document
#[derive(Debug, Clone, Default)]
pub struct CharCounts {
    counts: BTreeMap<char, usize>,
    whitespace: usize,
    total: usize,
}

impl CharCounts {
    /// Count every code point of `text`
    pub fn from_text(text: &str) -> Self {
        let mut counts = Self::default();
        for c in text.chars() {
            *counts.counts.entry(c).or_insert(0) += 1;
            counts.total += 1;
            if c.is_whitespace() {
                counts.whitespace += 1;
            }
        }
        counts
    }

    /// Occurrences of one code point
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Occurrences of a class member; members of several code points never match
    pub fn member_count(&self, member: &str) -> usize {
        let mut chars = member.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.count(c),
            _ => 0,
        }
    }

    /// Whitespace code points (W)
    pub fn whitespace(&self) -> usize {
        self.whitespace
    }

    /// Non-whitespace code points (M)
    pub fn non_whitespace(&self) -> usize {
        self.total - self.whitespace
    }

    /// Distinct code points in ascending order with their counts
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }
}

/// Character feature engine
#[derive(Debug, Clone, Default)]
pub struct CharacterFeatures {
    config: CharacterConfig,
    classes: Option<ClassTable>,
}

impl CharacterFeatures {
    /// Engine without a class table (raw per-character profile)
    pub fn fallback(config: CharacterConfig) -> Self {
        Self {
            config,
            classes: None,
        }
    }

    /// Engine driven by a class table
    ///
    /// The table must define both reserved classes.
    pub fn with_classes(
        config: CharacterConfig,
        classes: ClassTable,
    ) -> Result<Self, ClassDefinitionError> {
        classes.require(reserved::PUNCTUATION)?;
        classes.require(reserved::LOWER)?;
        Ok(Self {
            config,
            classes: Some(classes),
        })
    }

    /// Engine for an optional class table
    pub fn new(
        config: CharacterConfig,
        classes: Option<ClassTable>,
    ) -> Result<Self, ClassDefinitionError> {
        match classes {
            Some(table) => Self::with_classes(config, table),
            None => Ok(Self::fallback(config)),
        }
    }

    /// Engine configuration
    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    /// Compute features for a document source
    ///
    /// Pre-split token sequences carry no character data and are rejected.
    pub fn compute_source(&self, source: &TextSource) -> Result<FeatureVector, TokenizeError> {
        let text = source.read_text(self.config.encoding)?;
        Ok(self.compute_all(&text))
    }

    /// Compute features for document text
    pub fn compute_all(&self, document: &str) -> FeatureVector {
        let counts = CharCounts::from_text(document);
        debug!(
            "Character counts: M={}, W={}, class table: {}",
            counts.non_whitespace(),
            counts.whitespace(),
            self.classes.is_some()
        );

        match &self.classes {
            Some(table) => {
                let mut features = self.class_ratios(table, &counts);
                features.merge(self.space_features(&counts));
                features.merge(self.punctuation_features(table, &counts));
                features.merge(self.alphabet_features(table, document, &counts));
                features
            }
            None => self.frequency_profile(&counts),
        }
    }

    /// One ratio per class: summed member counts over M
    pub fn class_ratios(&self, table: &ClassTable, counts: &CharCounts) -> FeatureVector {
        let m = counts.non_whitespace();
        let mut features = FeatureVector::new();
        for class in table.iter() {
            let hits: usize = class.members.iter().map(|c| counts.member_count(c)).sum();
            features.insert(class.name.clone(), ratio(hits, m));
        }
        features
    }

    /// `ws`, `s2w` and one ratio per built-in whitespace kind
    pub fn space_features(&self, counts: &CharCounts) -> FeatureVector {
        let m = counts.non_whitespace();
        let w = counts.whitespace();
        let mut features = FeatureVector::new();
        features.insert("ws", ratio(w, m));
        features.insert("s2w", ratio(counts.count(' '), w));
        for (name, c) in SPACE_TYPES {
            features.insert(name, ratio(counts.count(c), m));
        }
        features
    }

    /// `R:<mark>` for each member of the punctuation class
    pub fn punctuation_features(&self, table: &ClassTable, counts: &CharCounts) -> FeatureVector {
        let m = counts.non_whitespace();
        let mut features = FeatureVector::new();
        if let Some(punctuation) = table.get(reserved::PUNCTUATION) {
            for mark in &punctuation.members {
                features.insert(format!("R:{mark}"), ratio(counts.member_count(mark), m));
            }
        }
        features
    }

    /// `alpha` and `R:<letter>` counted against the lowercased document
    pub fn alphabet_features(
        &self,
        table: &ClassTable,
        document: &str,
        counts: &CharCounts,
    ) -> FeatureVector {
        let m = counts.non_whitespace();
        let mut features = FeatureVector::new();
        let Some(lower) = table.get(reserved::LOWER) else {
            return features;
        };

        let folded = CharCounts::from_text(&document.to_lowercase());
        let letters: Vec<(&str, usize)> = lower
            .members
            .iter()
            .map(|l| (l.as_str(), folded.member_count(l)))
            .collect();

        let total: usize = letters.iter().map(|(_, n)| n).sum();
        features.insert("alpha", ratio(total, m));
        for (letter, n) in letters {
            features.insert(format!("R:{letter}"), ratio(n, m));
        }
        features
    }

    /// `ws` and `R:<char>` for every distinct code point, ascending
    pub fn frequency_profile(&self, counts: &CharCounts) -> FeatureVector {
        let m = counts.non_whitespace();
        let mut features = FeatureVector::new();
        features.insert("ws", ratio(counts.whitespace(), m));
        for (c, n) in counts.iter() {
            features.insert(format!("R:{c}"), ratio(n, m));
        }
        features
    }
}
