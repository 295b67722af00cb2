//! Run-wide settings, built once at startup and shared read-only.

use std::path::PathBuf;

/// Immutable configuration for one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Forced language for every target; empty means detect per file.
    pub language: String,
    /// File whose content replaces the default query for every target.
    pub query_file: Option<PathBuf>,
    /// Print only capture text, without `path:row:column` lines.
    pub quiet: bool,
    /// Skip targets that fail instead of aborting the run.
    pub keep_going: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_query_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.query_file = Some(path.into());
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// The language override, if one was given.
    pub fn language_override(&self) -> Option<&str> {
        if self.language.is_empty() {
            None
        } else {
            Some(&self.language)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_language_is_no_override() {
        assert_eq!(SearchConfig::new().language_override(), None);
        assert_eq!(
            SearchConfig::new().with_language("Go").language_override(),
            Some("Go")
        );
    }
}
