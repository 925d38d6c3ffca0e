//! Engine configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use tokenizer::Encoding;

/// Longest tracked word length; longer words fold into this bucket
pub const MAX_WORD_LENGTH: usize = 30;

/// Inclusive word-length range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    /// Create a validated range
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check that the range lies within [1, MAX_WORD_LENGTH]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min >= 1 && self.min <= self.max && self.max <= MAX_WORD_LENGTH {
            Ok(())
        } else {
            Err(ConfigError::InvalidLengthRange {
                min: self.min,
                max: self.max,
                limit: MAX_WORD_LENGTH,
            })
        }
    }

    /// Lengths in the range
    pub fn lengths(&self) -> std::ops::RangeInclusive<usize> {
        self.min..=self.max
    }
}

/// Lexical richness configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalConfig {
    /// Lengths summed into `ShortWordRatio`
    pub short_word_range: LengthRange,

    /// Lengths emitted as `LengthRatio-<L>`
    pub length_ratio_range: LengthRange,

    /// Drop tokens that are not purely alphabetic before counting
    pub alphabetic_only: bool,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            short_word_range: LengthRange { min: 1, max: 3 },
            length_ratio_range: LengthRange {
                min: 1,
                max: MAX_WORD_LENGTH,
            },
            alphabetic_only: false,
        }
    }
}

impl LexicalConfig {
    /// Validate both length ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.short_word_range.validate()?;
        self.length_ratio_range.validate()
    }
}

/// Character feature configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Encoding for file-backed documents; counting is always per code point
    pub encoding: Encoding,
}
