use crate::lang::table;
use crate::lang::LanguageId;
use ast_grep_core::Language;
use ast_grep_language::SupportLang;
use std::path::Path;

/// Identifies the language of a file from its path and content.
pub trait LanguageDetector {
    fn detect(&self, path: &Path, content: &[u8]) -> Option<LanguageId>;
}

/// Extension lookup first, then the `#!` interpreter line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDetector;

impl LanguageDetector for DefaultDetector {
    fn detect(&self, path: &Path, content: &[u8]) -> Option<LanguageId> {
        let entry = SupportLang::from_path(path)
            .and_then(table::for_grammar)
            .or_else(|| interpreter(content).and_then(table::lookup))?;
        LanguageId::new(entry.name)
    }
}

/// Interpreter named by a `#!` line, normalised to a table alias.
///
/// Handles `/usr/bin/env` indirection (with `-S`) and versioned
/// binaries such as `python3.12`.
fn interpreter(content: &[u8]) -> Option<&'static str> {
    let first_line = content.split(|&b| b == b'\n').next()?;
    let line = std::str::from_utf8(first_line).ok()?.strip_prefix("#!")?;

    let mut words = line.split_whitespace();
    let mut program = basename(words.next()?);
    if program == "env" {
        program = basename(words.find(|w| !w.starts_with('-'))?);
    }

    let bare = program.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    let alias = match bare {
        "python" => "python",
        "node" | "nodejs" => "node",
        "bash" | "sh" | "zsh" | "dash" | "ksh" => "sh",
        "ruby" => "ruby",
        "lua" | "luajit" => "lua",
        "php" => "php",
        _ => return None,
    };
    Some(alias)
}

fn basename(program: &str) -> &str {
    program.rsplit('/').next().unwrap_or(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(path: &str, content: &str) -> Option<String> {
        DefaultDetector
            .detect(Path::new(path), content.as_bytes())
            .map(|id| id.as_str().to_string())
    }

    #[test]
    fn detects_by_extension() {
        assert_eq!(detect("src/main.rs", "").as_deref(), Some("Rust"));
        assert_eq!(detect("tool.py", "").as_deref(), Some("Python"));
        assert_eq!(detect("main.go", "").as_deref(), Some("Go"));
        assert_eq!(detect("app.tsx", "").as_deref(), Some("TSX"));
        assert_eq!(detect("data.json", "{}").as_deref(), Some("JSON"));
    }

    #[test]
    fn extension_wins_over_shebang() {
        assert_eq!(
            detect("script.rb", "#!/usr/bin/env python3\n").as_deref(),
            Some("Ruby")
        );
    }

    #[test]
    fn detects_by_shebang() {
        assert_eq!(
            detect("bin/tool", "#!/usr/bin/env python3\nprint(1)\n").as_deref(),
            Some("Python")
        );
        assert_eq!(
            detect("bin/tool", "#!/usr/bin/python3.12\n").as_deref(),
            Some("Python")
        );
        assert_eq!(detect("run", "#!/bin/bash\necho hi\n").as_deref(), Some("Shell"));
        assert_eq!(
            detect("run", "#!/usr/bin/env -S node --harmony\n").as_deref(),
            Some("JavaScript")
        );
    }

    #[test]
    fn unknown_content_is_undetected() {
        assert_eq!(detect("notes.txt", "hello"), None);
        assert_eq!(detect("README", "#!/usr/bin/perl\n"), None);
        assert_eq!(detect("blob", ""), None);
    }

    #[test]
    fn interpreter_ignores_non_utf8() {
        assert_eq!(interpreter(&[0xff, 0xfe, b'\n']), None);
    }
}
