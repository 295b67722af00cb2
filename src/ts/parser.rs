use crate::errors::SearchError;
use ast_grep_language::{LanguageExt, SupportLang};
use std::borrow::Cow;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Tree-sitter parser bound to one grammar.
pub struct GrammarParser {
    parser: Parser,
}

impl GrammarParser {
    pub fn new(grammar: SupportLang) -> Result<Self, SearchError> {
        let mut parser = Parser::new();
        let ts_lang = grammar.get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|e| SearchError::GrammarLoad {
                language: format!("{grammar:?}"),
                message: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse raw file bytes. `path` is only used for error reporting.
    pub fn parse<'a>(
        &mut self,
        path: &Path,
        source: &'a [u8],
    ) -> Result<ParsedTarget<'a>, SearchError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| SearchError::ParseFailed {
                path: path.to_path_buf(),
            })?;
        Ok(ParsedTarget { source, tree })
    }
}

/// A parsed file with its tree-sitter tree.
pub struct ParsedTarget<'a> {
    pub source: &'a [u8],
    pub tree: Tree,
}

impl ParsedTarget<'_> {
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// S-expression dump of the whole tree.
    pub fn sexp(&self) -> String {
        self.root_node().to_sexp()
    }

    /// Number of ERROR and MISSING nodes in the tree.
    pub fn error_count(&self) -> usize {
        count_error_nodes(self.root_node())
    }

}

/// Exact source text of a node. Invalid UTF-8 is replaced, not rejected.
pub(crate) fn node_text<'a>(source: &'a [u8], node: Node<'_>) -> Cow<'a, str> {
    String::from_utf8_lossy(source.get(node.byte_range()).unwrap_or_default())
}

fn count_error_nodes(node: Node<'_>) -> usize {
    if !node.has_error() {
        return 0;
    }

    let own = usize::from(node.is_error() || node.is_missing());
    let mut cursor = node.walk();
    let children: usize = node.children(&mut cursor).map(count_error_nodes).sum();
    own + children
}
