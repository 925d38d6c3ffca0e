//! Combined Feature Extraction

use crate::character::CharacterFeatures;
use crate::lexical::LexicalRichness;
use crate::vector::FeatureVector;
use tokenizer::{TextSource, TokenizeError};
use tracing::debug;

/// Runs both engines on a document and merges their outputs
///
/// Lexical features come first, character features after.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    lexical: LexicalRichness,
    character: CharacterFeatures,
}

impl FeatureExtractor {
    /// Create an extractor from configured engines
    pub fn new(lexical: LexicalRichness, character: CharacterFeatures) -> Self {
        Self { lexical, character }
    }

    /// Extract features from a document source
    ///
    /// The text is read once, decoded with the character engine's encoding.
    /// Sources without document text (pre-split tokens, unreadable paths)
    /// are errors because the character engine needs the raw characters.
    pub fn extract(&self, source: &TextSource) -> Result<FeatureVector, TokenizeError> {
        let text = source.read_text(self.character.config().encoding)?;
        Ok(self.extract_text(&text))
    }

    /// Extract features from document text
    pub fn extract_text(&self, document: &str) -> FeatureVector {
        let mut features = self.lexical.compute_all(document);
        let lexical_len = features.len();
        features.merge(self.character.compute_all(document));
        debug!(
            "Extracted {} lexical + {} character features",
            lexical_len,
            features.len() - lexical_len
        );
        features
    }
}
