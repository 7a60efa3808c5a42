//! Text extraction backend abstraction.
//!
//! The converter never reads PDF internals itself; it asks a [`TextExtractor`]
//! for the layout-preserving text stream of a file, with pages separated by
//! form feeds.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Environment variable overriding the `pdftotext` program path.
pub const PDFTOTEXT_ENV: &str = "PAGECITE_PDFTOTEXT";

const DEFAULT_PROGRAM: &str = "pdftotext";

/// Produces the text stream of a source document.
pub trait TextExtractor {
    /// Extract text for the whole document, pages separated by U+000C.
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extractor backed by the poppler `pdftotext` command.
#[derive(Debug, Clone)]
pub struct PdftotextExtractor {
    /// Program to run
    pub program: OsString,
    /// Pass `-layout` so columns stay aligned
    pub layout: bool,
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            layout: true,
        }
    }
}

impl PdftotextExtractor {
    /// Create an extractor running `pdftotext -layout`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor whose program comes from `PAGECITE_PDFTOTEXT` when set.
    pub fn from_env() -> Self {
        match std::env::var_os(PDFTOTEXT_ENV) {
            Some(program) if !program.is_empty() => Self::new().with_program(program),
            _ => Self::new(),
        }
    }

    /// Set the program to run.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Enable or disable layout mode.
    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let mut command = Command::new(&self.program);
        if self.layout {
            command.arg("-layout");
        }
        command.arg(path).arg("-");

        log::debug!("Running {:?} on {}", self.program, path.display());

        let output = command.output().map_err(|source| Error::ExtractorUnavailable {
            program: self.program.to_string_lossy().into_owned(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                "pdftotext failed".to_string()
            } else {
                stderr
            };
            return Err(Error::Extraction(message));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok(text.replace("\r\n", "\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extractor() {
        let extractor = PdftotextExtractor::new();
        assert_eq!(extractor.program, OsString::from("pdftotext"));
        assert!(extractor.layout);
    }

    #[test]
    fn test_builder() {
        let extractor = PdftotextExtractor::new()
            .with_program("/opt/poppler/bin/pdftotext")
            .with_layout(false);
        assert_eq!(
            extractor.program,
            OsString::from("/opt/poppler/bin/pdftotext")
        );
        assert!(!extractor.layout);
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let extractor =
            PdftotextExtractor::new().with_program("pagecite-no-such-extractor-binary");
        let err = extractor.extract(Path::new("missing.pdf")).unwrap_err();
        assert!(matches!(err, Error::ExtractorUnavailable { .. }));
    }
}
