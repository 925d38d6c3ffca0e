//! Document Sources and Decoding

use crate::TokenizeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Text encoding used to turn file bytes into code points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8, rejected when malformed
    #[default]
    Utf8,
    /// ISO-8859-1, every byte maps to the code point of the same value
    Latin1,
}

impl Encoding {
    /// Decode raw bytes into a string
    ///
    /// Returns `None` when the bytes are not valid for this encoding.
    pub fn decode(&self, bytes: Vec<u8>) -> Option<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes).ok(),
            Encoding::Latin1 => Some(bytes.into_iter().map(char::from).collect()),
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Encoding {
    type Err = TokenizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Encoding::Latin1),
            other => Err(TokenizeError::InvalidInput(format!(
                "unknown encoding '{other}'"
            ))),
        }
    }
}

/// Where a document comes from
///
/// Resolved once into tokens or text; consumers never re-inspect the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Decoded document text
    Raw(String),
    /// Document that has already been split into tokens
    Tokens(Vec<String>),
    /// File containing the document
    Path(PathBuf),
}

impl TextSource {
    /// Resolve the source into document text
    ///
    /// Token sequences carry no original text, so they are rejected.
    pub fn read_text(&self, encoding: Encoding) -> Result<String, TokenizeError> {
        match self {
            TextSource::Raw(text) => Ok(text.clone()),
            TextSource::Tokens(_) => Err(TokenizeError::InvalidInput(
                "pre-split tokens have no document text".to_string(),
            )),
            TextSource::Path(path) => read_file(path, encoding),
        }
    }
}

impl From<&str> for TextSource {
    fn from(text: &str) -> Self {
        TextSource::Raw(text.to_string())
    }
}

impl From<String> for TextSource {
    fn from(text: String) -> Self {
        TextSource::Raw(text)
    }
}

impl From<Vec<String>> for TextSource {
    fn from(tokens: Vec<String>) -> Self {
        TextSource::Tokens(tokens)
    }
}

impl From<PathBuf> for TextSource {
    fn from(path: PathBuf) -> Self {
        TextSource::Path(path)
    }
}

fn read_file(path: &Path, encoding: Encoding) -> Result<String, TokenizeError> {
    if !path.is_file() {
        return Err(TokenizeError::InvalidInput(format!(
            "{} is not a readable file",
            path.display()
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| TokenizeError::unreadable(path, e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    encoding
        .decode(bytes)
        .ok_or_else(|| TokenizeError::InvalidEncoding {
            path: path.to_path_buf(),
            encoding: encoding.to_string(),
        })
}
