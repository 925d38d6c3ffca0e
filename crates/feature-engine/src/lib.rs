//! Stylometric Feature Engine
//!
//! Turns a document into an ordered feature vector describing its lexical
//! richness and character-class profile.

mod character;
mod config;
mod error;
mod extractor;
mod lexical;
mod vector;

pub use character::{CharCounts, CharacterFeatures, SPACE_TYPES};
pub use config::{CharacterConfig, LengthRange, LexicalConfig, MAX_WORD_LENGTH};
pub use error::ConfigError;
pub use extractor::FeatureExtractor;
pub use lexical::{LexicalRichness, RichnessMeasures, SpectrumMeasures, TokenProfile};
pub use vector::{FeatureValue, FeatureVector};

pub use char_classes::{ClassDefinitionError, ClassTable};
pub use tokenizer::{Encoding, TextSource, TokenizeError};
