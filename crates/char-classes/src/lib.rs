//! Character Class Definitions
//!
//! Parses tab-separated class definitions (`name<TAB>m1 m2 ...`) into an
//! ordered table of named member sets.

mod error;
mod table;

pub use error::ClassDefinitionError;
pub use table::{CharClass, ClassTable};

/// Reserved class names the character engine relies on
pub mod reserved {
    /// Punctuation marks, one `R:<char>` feature each
    pub const PUNCTUATION: &str = "punctuation";
    /// Lowercase alphabet counted against a case-folded document
    pub const LOWER: &str = "lower";
}
