//! Language resolution: which grammar applies to a file.
//!
//! A language is named by a [`LanguageId`], either forced for the whole run
//! or detected per file by a [`LanguageDetector`]. The static [`table`] maps
//! names to grammars and default queries.

pub mod detect;
pub mod resolver;
pub mod table;

pub use detect::{DefaultDetector, LanguageDetector};
pub use resolver::LanguageResolver;
pub use table::{lookup, LanguageEntry, LANGUAGES};

use std::fmt;

/// Non-empty name of a language, e.g. `Rust` or `python`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageId(String);

impl LanguageId {
    /// Returns `None` for an empty name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_rejected() {
        assert!(LanguageId::new("").is_none());
        assert_eq!(LanguageId::new("Go").unwrap().to_string(), "Go");
    }
}
