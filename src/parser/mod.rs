//! Extraction stream parsing: page splitting and table detection.

mod backend;
mod pages;
mod table_detector;

pub use backend::{PdftotextExtractor, TextExtractor, PDFTOTEXT_ENV};
pub use pages::{split_pages, PAGE_BREAK};
pub use table_detector::{detect_tables, split_columns, TableDetector, TableDetectorConfig};
