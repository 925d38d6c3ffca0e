//! Whitespace Splitting

use crate::{Encoding, TextSource, TokenizeError};
use tracing::debug;

/// Split text on runs of Unicode whitespace, dropping empty fragments
pub fn split_whitespace(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Resolve a source into its token sequence
///
/// Pre-split token sequences are returned unchanged; text and files are
/// split on whitespace.
pub fn tokenize(source: &TextSource, encoding: Encoding) -> Result<Vec<String>, TokenizeError> {
    let tokens = match source {
        TextSource::Tokens(tokens) => tokens.clone(),
        TextSource::Raw(text) => split_whitespace(text),
        TextSource::Path(_) => split_whitespace(&source.read_text(encoding)?),
    };
    debug!("Tokenized document into {} tokens", tokens.len());
    Ok(tokens)
}

/// Whether a word consists of one or more letters and nothing else
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_whitespace_runs() {
        let tokens = split_whitespace("  the\tquick \n\n brown\u{3000}fox ");
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        assert!(split_whitespace("").is_empty());
        assert!(split_whitespace(" \t\n").is_empty());
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let tokens = split_whitespace("Hi, Bob. 42 !");
        assert_eq!(tokens, vec!["Hi,", "Bob.", "42", "!"]);
    }

    #[test]
    fn test_pre_split_tokens_unchanged() {
        let tokens = vec!["a b".to_string(), "c".to_string()];
        let source = TextSource::Tokens(tokens.clone());
        assert_eq!(tokenize(&source, Encoding::Utf8).unwrap(), tokens);
    }

    #[test]
    fn test_tokenize_raw() {
        let source = TextSource::from("a a b");
        assert_eq!(tokenize(&source, Encoding::Utf8).unwrap(), vec!["a", "a", "b"]);
    }

    #[test]
    fn test_alphabetic_word() {
        assert!(is_alphabetic_word("word"));
        assert!(is_alphabetic_word("naïve"));
        assert!(is_alphabetic_word("слово"));
        assert!(!is_alphabetic_word(""));
        assert!(!is_alphabetic_word("word,"));
        assert!(!is_alphabetic_word("42"));
        assert!(!is_alphabetic_word("a_b"));
    }

    proptest::proptest! {
        #[test]
        fn prop_tokens_are_non_empty_and_whitespace_free(text in "\\PC{0,200}") {
            for token in split_whitespace(&text) {
                proptest::prop_assert!(!token.is_empty());
                proptest::prop_assert!(!token.chars().any(char::is_whitespace));
            }
        }
    }
}
