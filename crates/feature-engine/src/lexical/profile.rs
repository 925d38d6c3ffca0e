//! Token Frequency Tables

use crate::config::MAX_WORD_LENGTH;
use std::collections::{BTreeMap, HashMap};

/// Frequency tables derived from one token sequence
///
/// Built once per document; every lexical metric reads from it.
#[derive(Debug, Clone, Default)]
pub struct TokenProfile {
    /// Total tokens (N)
    pub tokens: usize,
    /// Occurrence count per distinct token
    pub type_frequencies: HashMap<String, usize>,
    /// Number of types occurring exactly `i` times, keyed by `i`
    pub spectrum: BTreeMap<usize, usize>,
    /// Token occurrences per word length, lengths folded into [1, 30]
    pub lengths: BTreeMap<usize, usize>,
    /// Sum of code-point lengths over all token occurrences
    pub total_length: usize,
}

impl TokenProfile {
    /// Build the tables from a token sequence
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut type_frequencies: HashMap<String, usize> = HashMap::new();
        let mut lengths: BTreeMap<usize, usize> = BTreeMap::new();
        let mut total_length = 0;

        for token in tokens {
            let token = token.as_ref();
            *type_frequencies.entry(token.to_string()).or_insert(0) += 1;

            let len = token.chars().count();
            total_length += len;
            *lengths.entry(len.clamp(1, MAX_WORD_LENGTH)).or_insert(0) += 1;
        }

        let mut spectrum: BTreeMap<usize, usize> = BTreeMap::new();
        for &count in type_frequencies.values() {
            *spectrum.entry(count).or_insert(0) += 1;
        }

        Self {
            tokens: tokens.len(),
            type_frequencies,
            spectrum,
            lengths,
            total_length,
        }
    }

    /// Token count (N)
    pub fn n(&self) -> usize {
        self.tokens
    }

    /// Vocabulary size (V)
    pub fn v(&self) -> usize {
        self.type_frequencies.len()
    }

    /// Check if there are no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens == 0
    }

    /// Number of types occurring exactly `i` times
    pub fn types_with_frequency(&self, i: usize) -> usize {
        self.spectrum.get(&i).copied().unwrap_or(0)
    }

    /// Token occurrences of length `len`
    pub fn tokens_with_length(&self, len: usize) -> usize {
        self.lengths.get(&len).copied().unwrap_or(0)
    }

    /// Share of tokens per word length
    pub fn length_ratios(&self) -> BTreeMap<usize, f64> {
        self.lengths
            .iter()
            .map(|(&len, &count)| (len, ratio(count, self.tokens)))
            .collect()
    }

    /// Spectrum entries divided by N
    pub fn spectrum_ratios(&self) -> BTreeMap<usize, f64> {
        self.spectrum
            .iter()
            .map(|(&i, &count)| (i, ratio(count, self.tokens)))
            .collect()
    }
}

/// `numer / denom`, or 0 when `denom` is 0
pub(crate) fn ratio(numer: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}
