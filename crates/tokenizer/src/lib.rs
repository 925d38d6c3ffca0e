//! Document Tokenization
//!
//! Resolves a document source (raw text, pre-split tokens or a file path)
//! into a sequence of whitespace-delimited word tokens.

mod error;
mod source;
mod split;

pub use error::TokenizeError;
pub use source::{Encoding, TextSource};
pub use split::{is_alphabetic_word, split_whitespace, tokenize};
