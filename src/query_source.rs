//! Picks the grammar and query text to run for a resolved language.

use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::lang::{table, LanguageId};
use ast_grep_language::SupportLang;
use std::fs;
use tracing::debug;

/// Grammar and query text for one target.
#[derive(Debug, Clone)]
pub struct ResolvedQuery<'a> {
    /// `None` when the language has no grammar.
    pub grammar: Option<SupportLang>,
    /// Empty means dump the tree instead of matching.
    pub text: &'a str,
}

impl ResolvedQuery<'_> {
    pub fn is_diagnostic(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Resolves query text per language, honouring a run-wide query file.
#[derive(Debug, Clone, Default)]
pub struct QuerySource {
    override_text: Option<String>,
}

impl QuerySource {
    /// Build from the run configuration, reading the query file if one is set.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let override_text = match &config.query_file {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| SearchError::FileRead {
                    path: path.clone(),
                    source,
                })?;
                debug!(query_file = %path.display(), "loaded query override");
                Some(text)
            }
            None => None,
        };

        Ok(Self { override_text })
    }

    /// Use `text` in place of every language's default query.
    pub fn with_override(text: impl Into<String>) -> Self {
        Self {
            override_text: Some(text.into()),
        }
    }

    pub fn resolve(&self, language: &LanguageId) -> ResolvedQuery<'_> {
        let entry = table::lookup(language.as_str());
        let grammar = entry.map(|e| e.grammar);

        let text = match &self.override_text {
            Some(text) => text.as_str(),
            None => entry.map_or("", |e| e.default_query),
        };

        debug!(%language, ?grammar, query = %text, "resolved query");
        ResolvedQuery { grammar, text }
    }
}
