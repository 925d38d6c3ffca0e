//! Class Definition Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a character-class table
#[derive(Debug, Error)]
pub enum ClassDefinitionError {
    /// Line has no tab between class name and members
    #[error("Line {line}: missing tab separator in {content:?}")]
    MissingSeparator { line: usize, content: String },

    /// Line starts with a tab
    #[error("Line {line}: empty class name")]
    EmptyClassName { line: usize },

    /// A class the engine requires is absent
    #[error("Missing required class: {0}")]
    MissingReservedClass(&'static str),

    /// Definition file could not be read
    #[error("Cannot read class definitions from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
