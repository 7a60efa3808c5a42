//! Batch conversion of a directory of documents.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::parser::TextExtractor;

use super::Converter;

/// Outcome of converting one input in a batch.
#[derive(Debug)]
pub struct BatchItem {
    /// Input document
    pub source: PathBuf,
    /// Written Markdown path, or the error that stopped this input
    pub outcome: Result<PathBuf>,
}

impl BatchItem {
    /// Check if this input converted successfully.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-input results of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per input
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    /// Number of inputs that converted.
    pub fn success_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_ok()).count()
    }

    /// Number of inputs that failed.
    pub fn failure_count(&self) -> usize {
        self.items.len() - self.success_count()
    }

    /// Check if every input converted.
    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }
}

/// List files in `dir` matching `pattern`, sorted by path.
///
/// A missing directory, an invalid pattern or an empty match set is an
/// [`Error::InvalidArgument`].
pub fn collect_inputs(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::invalid_argument(
            "input_dir",
            format!("input directory not found: {}", dir.display()),
        ));
    }

    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        pattern
    );
    let entries = glob::glob(&full_pattern)
        .map_err(|e| Error::invalid_argument("glob", format!("{pattern}: {e}")))?;

    let mut inputs: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        return Err(Error::invalid_argument(
            "glob",
            format!("no files matching {} in {}", pattern, dir.display()),
        ));
    }
    Ok(inputs)
}

/// Convert every input into `out_dir`, continuing past failures.
pub fn convert_batch<E: TextExtractor>(
    converter: &Converter<E>,
    inputs: &[PathBuf],
    out_dir: &Path,
) -> BatchReport {
    convert_batch_with(converter, inputs, out_dir, |_| {})
}

/// Like [`convert_batch`], calling `on_item` after each input.
pub fn convert_batch_with<E, F>(
    converter: &Converter<E>,
    inputs: &[PathBuf],
    out_dir: &Path,
    mut on_item: F,
) -> BatchReport
where
    E: TextExtractor,
    F: FnMut(&BatchItem),
{
    let mut report = BatchReport::default();
    for source in inputs {
        let outcome = converter.convert_to_dir(source, out_dir);
        if let Err(e) = &outcome {
            log::warn!("Failed to convert {}: {}", source.display(), e);
        }
        let item = BatchItem {
            source: source.clone(),
            outcome,
        };
        on_item(&item);
        report.items.push(item);
    }
    report
}
