//! Treequery: structural search over tree-sitter queries
//!
//! Given a file or directory and a capture name, treequery parses each file
//! with the grammar for its language, runs a tree-sitter query against it and
//! prints every node bound to that capture.
//!
//! # Pipeline
//!
//! ```text
//! walker -> lang (resolve) -> query_source -> ts (parse, match) -> filter -> output
//! ```
//!
//! The query is either the language's built-in default or the content of a
//! user-supplied query file. When it is empty the parse tree is dumped
//! instead, which is handy while writing a new query.
//!
//! # Example
//!
//! ```no_run
//! use treequery::{Printer, SearchConfig, Searcher};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), treequery::SearchError> {
//! let config = SearchConfig::new().with_language("Rust");
//! let searcher = Searcher::new(&config)?;
//! let mut printer = Printer::new(std::io::stdout(), config.quiet);
//!
//! let summary = searcher.search_path(Path::new("src"), "name", &mut printer)?;
//! eprintln!("{} matches", summary.results);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod filter;
pub mod lang;
pub mod output;
pub mod query_source;
pub mod search;
pub mod ts;
pub mod walker;

// Re-exports
pub use config::SearchConfig;
pub use errors::SearchError;
pub use filter::{filter, CaptureFilter, CaptureResult};
pub use lang::{DefaultDetector, LanguageDetector, LanguageId, LanguageResolver};
pub use output::Printer;
pub use query_source::{QuerySource, ResolvedQuery};
pub use search::{SearchSummary, Searcher};
pub use ts::{Capture, CompiledQuery, GrammarParser, Match, ParsedTarget};
pub use walker::{walk, Entry, Target};
