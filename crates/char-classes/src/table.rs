//! Character Class Table

use crate::error::ClassDefinitionError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A named set of member characters
///
/// Members are kept as written. A member spanning several code points is
/// kept whole and never matches a single code point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClass {
    /// Class name
    pub name: String,
    /// Distinct members in definition order
    pub members: Vec<String>,
}

/// Ordered table of character classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTable {
    classes: Vec<CharClass>,
}

impl ClassTable {
    /// Parse definitions, one class per line
    ///
    /// Blank lines are skipped. A repeated class name replaces the earlier
    /// members but keeps its original position.
    pub fn parse(text: &str) -> Result<Self, ClassDefinitionError> {
        let mut table = Self::default();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let (name, members) = line.split_once('\t').ok_or_else(|| {
                ClassDefinitionError::MissingSeparator {
                    line: line_no,
                    content: line.to_string(),
                }
            })?;

            let name = name.trim();
            if name.is_empty() {
                return Err(ClassDefinitionError::EmptyClassName { line: line_no });
            }

            let mut distinct: Vec<String> = Vec::new();
            for member in members.split_whitespace() {
                if !distinct.iter().any(|m| m == member) {
                    distinct.push(member.to_string());
                }
            }

            table.insert(CharClass {
                name: name.to_string(),
                members: distinct,
            });
        }

        debug!("Parsed {} character classes", table.len());
        Ok(table)
    }

    /// Read and parse a definition file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClassDefinitionError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ClassDefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Add a class, replacing any class of the same name in place
    pub fn insert(&mut self, class: CharClass) {
        match self.classes.iter_mut().find(|c| c.name == class.name) {
            Some(existing) => existing.members = class.members,
            None => self.classes.push(class),
        }
    }

    /// Look up a class by name
    pub fn get(&self, name: &str) -> Option<&CharClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Look up a class the caller cannot work without
    pub fn require(&self, name: &'static str) -> Result<&CharClass, ClassDefinitionError> {
        self.get(name).ok_or(ClassDefinitionError::MissingReservedClass(name))
    }

    /// Classes in definition order
    pub fn iter(&self) -> impl Iterator<Item = &CharClass> {
        self.classes.iter()
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the table has no classes
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
