//! Rendering of search results.
//!
//! Each selected capture prints as a `path:row:column` line followed by the
//! captured text verbatim. Quiet mode drops the location line. Output is
//! written in the order results arrive; nothing is sorted or held back.

use crate::filter::CaptureResult;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Writes results, tree dumps and notices to an output stream.
pub struct Printer<W> {
    out: W,
    quiet: bool,
    color: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self {
            out,
            quiet,
            color: false,
        }
    }

    /// Colour location lines and notices. Capture text is never coloured.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn print_capture(&mut self, result: &CaptureResult<'_, '_>) -> io::Result<()> {
        if !self.quiet {
            let location = format!(
                "{}:{}:{}",
                result.path.display(),
                result.row,
                result.column
            );
            if self.color {
                writeln!(self.out, "{}", location.purple())?;
            } else {
                writeln!(self.out, "{location}")?;
            }
        }
        writeln!(self.out, "{}", result.text)
    }

    /// Print the S-expression dump of a parse tree.
    pub fn print_tree(&mut self, sexp: &str) -> io::Result<()> {
        writeln!(self.out, "{sexp}")
    }

    /// Note a subdirectory that was not searched.
    pub fn print_directory(&mut self, path: &Path) -> io::Result<()> {
        let notice = format!("directory found: {}", path.display());
        if self.color {
            writeln!(self.out, "{}", notice.dimmed())
        } else {
            writeln!(self.out, "{notice}")
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result<'a>(path: &'a Path, row: usize, column: usize, text: &'a str) -> CaptureResult<'a, 'a> {
        CaptureResult {
            path,
            row,
            column,
            text: text.into(),
        }
    }

    fn render(quiet: bool, results: &[CaptureResult<'_, '_>]) -> String {
        let mut printer = Printer::new(Vec::new(), quiet);
        for r in results {
            printer.print_capture(r).unwrap();
        }
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn location_then_text() {
        let path = Path::new("/tmp/a.py");
        let out = render(false, &[result(path, 1, 1, "a")]);
        assert_eq!(out, "/tmp/a.py:1:1\na\n");
    }

    #[test]
    fn quiet_prints_text_only() {
        let path = Path::new("/tmp/a.py");
        let out = render(true, &[result(path, 1, 1, "a")]);
        assert_eq!(out, "a\n");
    }

    #[test]
    fn multi_line_text_is_verbatim() {
        let path = Path::new("x.rs");
        let out = render(false, &[result(path, 3, 5, "fn a() {\n\t\"q\"\n}")]);
        assert_eq!(out, "x.rs:3:5\nfn a() {\n\t\"q\"\n}\n");
    }

    #[test]
    fn directory_notice_names_the_path() {
        let mut printer = Printer::new(Vec::new(), false);
        printer.print_directory(Path::new("/src/nested")).unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "directory found: /src/nested\n");
    }

    #[test]
    fn tree_dump_is_one_line() {
        let mut printer = Printer::new(Vec::new(), true);
        printer.print_tree("(document (object))").unwrap();
        assert_eq!(printer.into_inner(), b"(document (object))\n");
    }

    proptest! {
        #[test]
        fn quiet_equals_loud_without_locations(
            texts in prop::collection::vec("[a-z]{1,8}", 0..8),
        ) {
            let path = Path::new("/p/f.rs");
            let results: Vec<_> = texts
                .iter()
                .enumerate()
                .map(|(i, t)| result(path, i + 1, 1, t))
                .collect();

            let loud = render(false, &results);
            let quiet = render(true, &results);

            let stripped: Vec<&str> = loud.lines().filter(|l| !l.starts_with("/p/f.rs:")).collect();
            prop_assert_eq!(quiet.lines().collect::<Vec<_>>(), stripped);
        }
    }
}
