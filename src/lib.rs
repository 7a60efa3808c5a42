//! # pagecite
//!
//! Page-indexed Markdown conversion and cited retrieval for PDF corpora.
//!
//! Source PDFs are run through a layout-preserving text extractor and
//! assembled into Markdown where every page keeps its `## p.N` anchor. Term
//! searches over the result return hits that cite the source document and
//! page, and rule tables found in the corpus can be matched and evaluated.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pagecite::{build_terms, EvidenceIndex};
//!
//! fn main() -> pagecite::Result<()> {
//!     // Convert a PDF to page-indexed Markdown
//!     let markdown = pagecite::to_markdown("docs/학칙.pdf")?;
//!     std::fs::write("knowledge/raw-md/학칙.md", &markdown)?;
//!
//!     // Search it
//!     let index = EvidenceIndex::open(&["knowledge/raw-md/학칙.md"])?;
//!     for hit in index.search(&build_terms("휴학 기간"), 5) {
//!         println!("{} {}", hit.citation_hint, hit.snippet);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Page anchoring**: every line of output traces back to a source page
//! - **Table recovery**: column-aligned text becomes Markdown pipe tables
//! - **Cited search**: scored term hits with `(document.pdf, p.N)` hints
//! - **Rule evaluation**: partial-key matching over credit requirement tables
//! - **Parallel processing**: Uses Rayon for multi-page documents

pub mod catalog;
pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod rules;
pub mod search;
pub mod service;

// Re-export commonly used types
pub use catalog::{classify, Category, Classification, CorpusLayout};
pub use convert::{ConvertOptions, ConvertResult, Converter};
pub use error::{Error, Result};
pub use model::{AssembledDocument, Metadata, Page, Table, TableBlock};
pub use parser::{split_pages, PdftotextExtractor, TableDetector, TableDetectorConfig, TextExtractor};
pub use render::{normalize, AssemblyStats, JsonFormat, MarkdownRenderer, RenderOptions};
pub use rules::{best_row, evaluate, EarnedCredits, Judgement, MajorType, RuleRow};
pub use search::{build_terms, EvidenceHit, EvidenceIndex, PageSearch, PatternOptions};
pub use service::Service;

use std::path::Path;

/// Convert a PDF to page-indexed Markdown.
///
/// Uses `pdftotext` (or the program named by `PAGECITE_PDFTOTEXT`) and the
/// default options.
///
/// # Example
///
/// ```no_run
/// use pagecite::to_markdown;
///
/// let markdown = to_markdown("docs/학사 일정.pdf").unwrap();
/// std::fs::write("학사 일정.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    to_markdown_with_options(path, &ConvertOptions::default())
}

/// Convert a PDF to Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use pagecite::{to_markdown_with_options, ConvertOptions, RenderOptions};
///
/// let options = ConvertOptions::new()
///     .with_render_options(RenderOptions::new().sequential());
/// let markdown = to_markdown_with_options("docs/학칙.pdf", &options).unwrap();
/// ```
pub fn to_markdown_with_options<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<String> {
    let converter = Converter::new(PdftotextExtractor::from_env(), options.clone());
    Ok(converter.convert_file(path.as_ref())?.markdown)
}

/// Convert a PDF to JSON.
///
/// # Example
///
/// ```no_run
/// use pagecite::{to_json, JsonFormat};
///
/// let json = to_json("docs/학칙.pdf", JsonFormat::Pretty).unwrap();
/// std::fs::write("학칙.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let converter = Converter::new(PdftotextExtractor::from_env(), ConvertOptions::default());
    let result = converter.convert_file(path.as_ref())?;
    render::to_json(&result.document, format)
}

/// Assemble an already extracted text stream into Markdown.
///
/// Pages are separated by form feeds, as `pdftotext` emits them.
pub fn text_to_markdown(title: &str, source: &str, text: &str) -> String {
    let pages = split_pages(text);
    render::assemble_markdown(title, source, &pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_markdown() {
        let markdown = text_to_markdown("학칙", "docs/학칙.pdf", "제1조 목적\u{000C}\u{000C}");

        assert!(markdown.starts_with("# 학칙\n\n- source_pdf: `docs/학칙.pdf`\n"));
        assert!(markdown.contains("- total_pages: `2`"));
        assert!(markdown.contains("## p.1\n\n### text\n\n```text\n제1조 목적\n```"));
        assert!(markdown.contains("## p.2\n\n```text\n(blank page)\n```"));
    }

    #[test]
    fn test_convert_missing_extractor() {
        let extractor = PdftotextExtractor::new().with_program("pagecite-missing-extractor");
        let converter = Converter::new(extractor, ConvertOptions::default());
        let result = converter.convert_file(Path::new("docs/학칙.pdf"));

        assert!(matches!(result, Err(Error::ExtractorUnavailable { .. })));
    }
}
