//! Enumerates the files a run searches.
//!
//! A file path yields one target. A directory yields its direct children in
//! file-name order: regular files become targets, subdirectories are reported
//! but never descended into.

use crate::errors::SearchError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A file selected for searching, with its raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl Target {
    pub fn read(path: PathBuf) -> Result<Self, SearchError> {
        match fs::read(&path) {
            Ok(content) => Ok(Self { path, content }),
            Err(source) => Err(SearchError::FileRead { path, source }),
        }
    }
}

/// One item produced by [`walk`].
#[derive(Debug)]
pub enum Entry {
    File(Target),
    /// A subdirectory that was skipped.
    Directory(PathBuf),
}

/// Start walking `path`.
///
/// Fails with [`SearchError::PathNotFound`] when `path` cannot be stat'ed.
/// Reported paths are absolute, so a file prints the same whether it was
/// named directly or found through its directory.
pub fn walk(path: &Path) -> Result<Walk, SearchError> {
    let not_found = |source| SearchError::PathNotFound {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(not_found)?;
    let root = std::path::absolute(path).map_err(not_found)?;

    let state = if metadata.is_dir() {
        debug!(root = %root.display(), "listing directory");
        State::Directory(
            WalkDir::new(root)
                .min_depth(1)
                .max_depth(1)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter(),
        )
    } else {
        State::File(Some(root))
    };

    Ok(Walk { state })
}

/// Iterator returned by [`walk`]. File contents are read as each entry is
/// reached.
pub struct Walk {
    state: State,
}

enum State {
    File(Option<PathBuf>),
    Directory(walkdir::IntoIter),
}

impl Iterator for Walk {
    type Item = Result<Entry, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::File(path) => path.take().map(|p| Target::read(p).map(Entry::File)),
            State::Directory(entries) => loop {
                let entry = match entries.next()? {
                    Ok(entry) => entry,
                    Err(source) => {
                        let path = source.path().map(Path::to_path_buf).unwrap_or_default();
                        return Some(Err(SearchError::Walk { path, source }));
                    }
                };

                let file_type = entry.file_type();
                if file_type.is_dir() {
                    return Some(Ok(Entry::Directory(entry.into_path())));
                }
                if file_type.is_file() {
                    return Some(Target::read(entry.into_path()).map(Entry::File));
                }
                debug!(path = %entry.path().display(), "skipping special file");
            },
        }
    }
}
