use std::path::PathBuf;
use thiserror::Error;

/// Every failure the search pipeline can report.
///
/// Engine-specific errors (`tree_sitter::QueryError`, `tree_sitter::LanguageError`,
/// `walkdir::Error`) are converted into these variants at the boundary so callers
/// only ever match on this closed set.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("path not found: {path}: {source}")]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error reading {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("language could not be detected for {path}")]
    LanguageUnresolved { path: PathBuf },

    #[error("no parser for: {language}")]
    UnsupportedLanguage { language: String },

    #[error("failed to load {language} grammar: {message}")]
    GrammarLoad { language: String, message: String },

    #[error("failed to parse {path}")]
    ParseFailed { path: PathBuf },

    #[error("problem with query for {language}: {message}")]
    QueryCompile { language: String, message: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl SearchError {
    /// Whether this error stops the whole run even under `--keep-going`.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SearchError::PathNotFound { .. } | SearchError::Output(_)
        )
    }
}
