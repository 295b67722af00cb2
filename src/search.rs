//! The per-target search pipeline.
//!
//! For every file the walker yields: resolve the language, pick the query,
//! parse, run the query and print the captures named by the user. A query
//! that resolves to empty text dumps the parse tree instead.

use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::filter::filter;
use crate::lang::{DefaultDetector, LanguageDetector, LanguageResolver};
use crate::output::Printer;
use crate::query_source::QuerySource;
use crate::ts::{CompiledQuery, GrammarParser, QueryCursor};
use crate::walker::{walk, Entry, Target};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// Files searched, including ones that failed.
    pub files: usize,
    /// Subdirectories reported and skipped.
    pub directories: usize,
    /// Captures printed.
    pub results: usize,
    /// Targets skipped because of an error (only with `keep_going`).
    pub failed: usize,
}

/// Runs searches under one [`SearchConfig`].
pub struct Searcher<'c, D = DefaultDetector> {
    config: &'c SearchConfig,
    resolver: LanguageResolver<D>,
    queries: QuerySource,
}

impl<'c> Searcher<'c, DefaultDetector> {
    pub fn new(config: &'c SearchConfig) -> Result<Self, SearchError> {
        Self::with_detector(config, DefaultDetector)
    }
}

impl<'c, D: LanguageDetector> Searcher<'c, D> {
    pub fn with_detector(config: &'c SearchConfig, detector: D) -> Result<Self, SearchError> {
        Ok(Self {
            config,
            resolver: LanguageResolver::with_detector(config.language_override(), detector),
            queries: QuerySource::from_config(config)?,
        })
    }

    /// Search a file, or the direct children of a directory.
    ///
    /// The first failing target ends the run unless `keep_going` is set, in
    /// which case it is logged, counted and skipped. A missing `path` or a
    /// failed write always ends the run.
    pub fn search_path<W: Write>(
        &self,
        path: &Path,
        capture: &str,
        printer: &mut Printer<W>,
    ) -> Result<SearchSummary, SearchError> {
        let mut summary = SearchSummary::default();

        for entry in walk(path)? {
            let outcome = entry.and_then(|entry| match entry {
                Entry::Directory(dir) => {
                    summary.directories += 1;
                    printer.print_directory(&dir)?;
                    Ok(())
                }
                Entry::File(target) => {
                    summary.files += 1;
                    let found = self.search_target(&target, capture, printer)?;
                    summary.results += found;
                    Ok(())
                }
            });

            if let Err(err) = outcome {
                if err.is_fatal() || !self.config.keep_going {
                    return Err(err);
                }
                warn!("skipping: {err}");
                summary.failed += 1;
            }
        }

        printer.flush()?;
        Ok(summary)
    }

    /// Search one target and print its captures. Returns how many were printed.
    pub fn search_target<W: Write>(
        &self,
        target: &Target,
        capture: &str,
        printer: &mut Printer<W>,
    ) -> Result<usize, SearchError> {
        let language = self.resolver.resolve(&target.path, &target.content)?;
        let query = self.queries.resolve(&language);

        let grammar = query
            .grammar
            .ok_or_else(|| SearchError::UnsupportedLanguage {
                language: language.to_string(),
            })?;

        let mut parser = GrammarParser::new(grammar)?;
        let parsed = parser.parse(&target.path, &target.content)?;

        let errors = parsed.error_count();
        if errors > 0 {
            debug!(path = %target.path.display(), errors, "parse tree has syntax errors");
        }

        if query.is_diagnostic() {
            debug!(path = %target.path.display(), %language, "empty query, dumping tree");
            printer.print_tree(&parsed.sexp())?;
            return Ok(0);
        }

        let compiled = CompiledQuery::compile(query.text, grammar, &language)?;
        if !capture.is_empty() && !compiled.capture_names().contains(&capture) {
            debug!(capture, captures = ?compiled.capture_names(), "query declares no such capture");
        }
        let mut cursor = QueryCursor::new();

        let mut printed = 0;
        for result in filter(&target.path, compiled.execute(&mut cursor, &parsed), capture) {
            printer.print_capture(&result)?;
            printed += 1;
        }

        debug!(path = %target.path.display(), %language, printed, "searched target");
        Ok(printed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn target(name: &str, content: &str) -> Target {
        Target {
            path: PathBuf::from(name),
            content: content.as_bytes().to_vec(),
        }
    }

    fn run_target(config: &SearchConfig, t: &Target, capture: &str) -> Result<String, SearchError> {
        let searcher = Searcher::new(config)?;
        let mut printer = Printer::new(Vec::new(), config.quiet);
        searcher.search_target(t, capture, &mut printer)?;
        Ok(String::from_utf8(printer.into_inner()).unwrap())
    }

    #[test]
    fn default_query_lists_rust_names() {
        let config = SearchConfig::new();
        let out = run_target(
            &config,
            &target("/src/lib.rs", "struct Foo;\n\nfn bar() {}\n"),
            "name",
        )
        .unwrap();
        assert_eq!(out, "/src/lib.rs:1:8\nFoo\n/src/lib.rs:3:4\nbar\n");
    }

    #[test]
    fn forced_language_overrides_extension() {
        let config = SearchConfig::new().with_language("Python").quiet(true);
        let out = run_target(&config, &target("script.txt", "def go():\n    pass\n"), "name").unwrap();
        assert_eq!(out, "go\n");
    }

    #[test]
    fn unknown_forced_language_is_unsupported() {
        let config = SearchConfig::new().with_language("Brainfuck");
        let err = run_target(&config, &target("a.bf", "+++"), "x").unwrap_err();
        match err {
            SearchError::UnsupportedLanguage { language } => assert_eq!(language, "Brainfuck"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn undetectable_file_is_unresolved() {
        let config = SearchConfig::new();
        let err = run_target(&config, &target("notes.txt", "hello"), "x").unwrap_err();
        assert!(matches!(err, SearchError::LanguageUnresolved { .. }));
    }

    #[test]
    fn empty_default_query_dumps_tree() {
        let config = SearchConfig::new();
        let out = run_target(&config, &target("data.json", "{}"), "anything").unwrap();
        assert!(out.starts_with("(document"), "{out}");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn grammar_only_languages_are_detected() {
        let config = SearchConfig::new();
        for name in ["main.tf", "default.nix", "Token.sol"] {
            let out = run_target(&config, &target(name, ""), "name").unwrap();
            assert!(out.starts_with('('), "{name}: {out}");
        }

        let forced = SearchConfig::new().with_language("Nix");
        assert!(run_target(&forced, &target("x.txt", "{ }"), "name").is_ok());
    }

    #[test]
    fn malformed_query_file_is_compile_error() {
        let dir = TempDir::new().unwrap();
        let query = dir.path().join("bad.scm");
        fs::write(&query, "(function_item").unwrap();

        let config = SearchConfig::new().with_query_file(&query);
        let err = run_target(&config, &target("a.rs", "fn a() {}"), "x").unwrap_err();
        assert!(matches!(err, SearchError::QueryCompile { .. }));
    }

    #[test]
    fn aborts_on_first_failure_by_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "no language here").unwrap();
        fs::write(dir.path().join("b.rs"), "fn b() {}").unwrap();

        let config = SearchConfig::new().quiet(true);
        let searcher = Searcher::new(&config).unwrap();
        let mut printer = Printer::new(Vec::new(), true);
        let err = searcher.search_path(dir.path(), "name", &mut printer).unwrap_err();

        assert!(matches!(err, SearchError::LanguageUnresolved { .. }));
        assert!(printer.into_inner().is_empty());
    }

    #[test]
    fn keep_going_skips_failed_targets() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "no language here").unwrap();
        fs::write(dir.path().join("b.rs"), "fn b() {}").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        let config = SearchConfig::new().quiet(true).keep_going(true);
        let searcher = Searcher::new(&config).unwrap();
        let mut printer = Printer::new(Vec::new(), true);
        let summary = searcher.search_path(dir.path(), "name", &mut printer).unwrap();

        assert_eq!(
            summary,
            SearchSummary {
                files: 2,
                directories: 1,
                results: 1,
                failed: 1,
            }
        );
        let out = String::from_utf8(printer.into_inner()).unwrap();
        let notice = format!("directory found: {}", std::path::absolute(dir.path().join("c")).unwrap().display());
        assert_eq!(out, format!("b\n{notice}\n"));
    }

    #[test]
    fn missing_path_is_fatal_even_with_keep_going() {
        let config = SearchConfig::new().keep_going(true);
        let searcher = Searcher::new(&config).unwrap();
        let mut printer = Printer::new(Vec::new(), false);
        let err = searcher
            .search_path(Path::new("/no/such/treequery/path"), "name", &mut printer)
            .unwrap_err();
        assert!(matches!(err, SearchError::PathNotFound { .. }));
    }
}
