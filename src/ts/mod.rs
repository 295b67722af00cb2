//! Tree-sitter boundary: parsing bytes and running compiled queries.
//!
//! Grammars come from `ast-grep-language`; everything past this module sees
//! owned [`Match`] values and [`SearchError`](crate::SearchError) variants,
//! never raw tree-sitter errors.

pub mod parser;
pub mod query;

pub use parser::{GrammarParser, ParsedTarget};
pub use query::{Capture, CompiledQuery, Match, MatchIter};
pub use tree_sitter::QueryCursor;
