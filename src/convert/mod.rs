//! Document conversion: extractor output to page-indexed Markdown.
//!
//! # Example
//!
//! ```no_run
//! use pagecite::convert::{ConvertOptions, Converter};
//! use pagecite::PdftotextExtractor;
//! use std::path::Path;
//!
//! fn main() -> pagecite::Result<()> {
//!     let converter = Converter::new(PdftotextExtractor::from_env(), ConvertOptions::default());
//!     let result = converter.convert_file(Path::new("docs/학칙.pdf"))?;
//!     println!("{}", result.markdown);
//!     Ok(())
//! }
//! ```

pub mod batch;

pub use batch::{collect_inputs, convert_batch, convert_batch_with, BatchItem, BatchReport};

use std::fs;
use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::AssembledDocument;
use crate::parser::{split_pages, TextExtractor};
use crate::render::{assemble, AssemblyStats, MarkdownRenderer, RenderOptions};

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// Apply Unicode NFC to the extraction stream before splitting pages
    pub unicode_nfc: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            unicode_nfc: true,
        }
    }
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_nfc(mut self, enabled: bool) -> Self {
        self.unicode_nfc = enabled;
        self
    }
}

/// Result of converting one document.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Assembled page model
    pub document: AssembledDocument,

    /// Rendered Markdown
    pub markdown: String,

    /// Assembly statistics
    pub stats: AssemblyStats,
}

/// Converts source documents through a text extractor.
#[derive(Debug, Clone)]
pub struct Converter<E> {
    extractor: E,
    options: ConvertOptions,
}

impl<E: TextExtractor> Converter<E> {
    /// Create a converter around an extractor.
    pub fn new(extractor: E, options: ConvertOptions) -> Self {
        Self { extractor, options }
    }

    /// Get the conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Extract and convert a single file.
    pub fn convert_file(&self, path: &Path) -> Result<ConvertResult> {
        let text = self.extractor.extract(path)?;
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.convert_text(title, path.display().to_string(), &text))
    }

    /// Convert an already extracted text stream.
    pub fn convert_text(
        &self,
        title: impl Into<String>,
        source: impl Into<String>,
        text: &str,
    ) -> ConvertResult {
        let text = if self.options.unicode_nfc {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        let pages = split_pages(&text);
        let document = assemble(title, source, &pages, &self.options.render);
        let markdown = MarkdownRenderer::new().render(&document);
        let stats = AssemblyStats::from_document(&document);

        ConvertResult {
            document,
            markdown,
            stats,
        }
    }

    /// Convert a file and write `{stem}.md` into `out_dir`.
    pub fn convert_to_dir(&self, path: &Path, out_dir: &Path) -> Result<PathBuf> {
        let result = self.convert_file(path)?;
        fs::create_dir_all(out_dir)?;

        let output_path = out_dir.join(format!("{}.md", result.document.metadata.title));
        fs::write(&output_path, &result.markdown)?;

        log::info!(
            "Converted {} ({} pages, {} tables) -> {}",
            path.display(),
            result.stats.page_count,
            result.stats.table_count,
            output_path.display()
        );
        Ok(output_path)
    }
}
