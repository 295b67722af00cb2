use crate::errors::SearchError;
use crate::lang::LanguageId;
use crate::ts::parser::{node_text, ParsedTarget};
use ast_grep_language::{LanguageExt, SupportLang};
use std::borrow::Cow;
use std::ops::Range;
use tree_sitter::{Point, Query, QueryCursor, QueryMatches, StreamingIterator};

/// One match of a compiled query, with its captures in engine order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub captures: Vec<Capture<'a>>,
}

/// A node bound to a capture name.
///
/// The same name may occur several times in one match, e.g. for
/// quantified patterns like `(identifier)+ @ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture<'a> {
    pub name: &'a str,
    /// Zero-based row and byte column of the node start.
    pub start: Point,
    pub byte_range: Range<usize>,
    pub text: Cow<'a, str>,
}

/// A tree-sitter query compiled against one grammar.
pub struct CompiledQuery {
    query: Query,
}

impl CompiledQuery {
    /// Compile query source for `grammar`.
    ///
    /// # Query Syntax
    ///
    /// Tree-sitter queries use S-expression syntax:
    /// ```text
    /// (function_item
    ///   name: (identifier) @func_name
    ///   body: (block) @body)
    /// ```
    ///
    /// Captures are prefixed with `@`; text predicates such as `#eq?` and
    /// `#match?` are evaluated while matching.
    pub fn compile(
        text: &str,
        grammar: SupportLang,
        language: &LanguageId,
    ) -> Result<Self, SearchError> {
        let ts_lang = grammar.get_ts_language();
        let query = Query::new(&ts_lang, text).map_err(|e| SearchError::QueryCompile {
            language: language.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { query })
    }

    pub fn capture_names(&self) -> &[&str] {
        self.query.capture_names()
    }

    /// Run the query over a parsed target.
    ///
    /// Matches are produced lazily, in the order the cursor yields them, and
    /// the iterator cannot be restarted.
    pub fn execute<'a>(
        &'a self,
        cursor: &'a mut QueryCursor,
        parsed: &'a ParsedTarget<'a>,
    ) -> MatchIter<'a> {
        let matches = cursor.matches(&self.query, parsed.root_node(), parsed.source);
        MatchIter {
            matches,
            names: self.query.capture_names(),
            source: parsed.source,
        }
    }
}

/// Forward-only iterator over query matches.
pub struct MatchIter<'a> {
    matches: QueryMatches<'a, 'a, &'a [u8], &'a [u8]>,
    names: &'a [&'a str],
    source: &'a [u8],
}

impl<'a> Iterator for MatchIter<'a> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // tree-sitter 0.25+ uses StreamingIterator
        let m = self.matches.next()?;
        let captures = m
            .captures
            .iter()
            .map(|capture| Capture {
                name: self
                    .names
                    .get(capture.index as usize)
                    .copied()
                    .unwrap_or_default(),
                start: capture.node.start_position(),
                byte_range: capture.node.byte_range(),
                text: node_text(self.source, capture.node),
            })
            .collect();

        Some(Match { captures })
    }
}
