//! Reduces raw query matches to the captures the user asked for.

use crate::ts::{Capture, Match};
use std::borrow::Cow;
use std::path::Path;

/// A capture selected for output. Row and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureResult<'p, 'a> {
    pub path: &'p Path,
    pub row: usize,
    pub column: usize,
    pub text: Cow<'a, str>,
}

impl<'p, 'a> CaptureResult<'p, 'a> {
    fn from_capture(path: &'p Path, capture: Capture<'a>) -> Self {
        Self {
            path,
            row: capture.start.row + 1,
            column: capture.start.column + 1,
            text: capture.text,
        }
    }
}

/// Lazily yields every capture named exactly `name`.
///
/// Matches are visited in arrival order and captures in engine order within
/// each match. Nothing is deduplicated. An empty `name` selects nothing.
pub struct CaptureFilter<'p, 'a, I> {
    path: &'p Path,
    name: &'p str,
    matches: I,
    pending: std::vec::IntoIter<Capture<'a>>,
}

impl<'p, 'a, I> CaptureFilter<'p, 'a, I>
where
    I: Iterator<Item = Match<'a>>,
{
    pub fn new(path: &'p Path, matches: impl IntoIterator<IntoIter = I>, name: &'p str) -> Self {
        Self {
            path,
            name,
            matches: matches.into_iter(),
            pending: Vec::new().into_iter(),
        }
    }
}

impl<'p, 'a, I> Iterator for CaptureFilter<'p, 'a, I>
where
    I: Iterator<Item = Match<'a>>,
{
    type Item = CaptureResult<'p, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.name.is_empty() {
            return None;
        }

        loop {
            for capture in self.pending.by_ref() {
                if capture.name == self.name {
                    return Some(CaptureResult::from_capture(self.path, capture));
                }
            }
            self.pending = self.matches.next()?.captures.into_iter();
        }
    }
}

/// Convenience wrapper around [`CaptureFilter::new`].
pub fn filter<'p, 'a, I>(
    path: &'p Path,
    matches: I,
    name: &'p str,
) -> CaptureFilter<'p, 'a, I::IntoIter>
where
    I: IntoIterator<Item = Match<'a>>,
{
    CaptureFilter::new(path, matches, name)
}
