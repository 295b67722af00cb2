use crate::errors::SearchError;
use crate::lang::detect::{DefaultDetector, LanguageDetector};
use crate::lang::LanguageId;
use std::path::Path;

/// Decides the language of each target.
///
/// A forced language applies to every target unchanged. Without one, each
/// target is detected on its own; nothing is cached, so a directory may mix
/// languages.
pub struct LanguageResolver<D = DefaultDetector> {
    forced: Option<LanguageId>,
    detector: D,
}

impl LanguageResolver<DefaultDetector> {
    pub fn new(forced: Option<&str>) -> Self {
        Self::with_detector(forced, DefaultDetector)
    }
}

impl<D: LanguageDetector> LanguageResolver<D> {
    pub fn with_detector(forced: Option<&str>, detector: D) -> Self {
        Self {
            forced: forced.and_then(LanguageId::new),
            detector,
        }
    }

    pub fn resolve(&self, path: &Path, content: &[u8]) -> Result<LanguageId, SearchError> {
        if let Some(forced) = &self.forced {
            return Ok(forced.clone());
        }

        self.detector
            .detect(path, content)
            .ok_or_else(|| SearchError::LanguageUnresolved {
                path: path.to_path_buf(),
            })
    }
}
