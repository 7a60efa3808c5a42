//! Assembly statistics.

use serde::{Deserialize, Serialize};

use crate::model::{AssembledDocument, Page};

/// Statistics collected while assembling a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStats {
    /// Total number of pages
    pub page_count: u32,

    /// Pages with no extractable text
    pub blank_page_count: u32,

    /// Number of table blocks kept
    pub table_count: u32,

    /// Number of data rows across all tables
    pub table_row_count: u32,

    /// Approximate word count of the normalized text
    pub word_count: u32,

    /// Character count of the normalized text (excluding whitespace)
    pub char_count: u32,
}

impl AssemblyStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for an assembled document.
    pub fn from_document(doc: &AssembledDocument) -> Self {
        let mut stats = Self::new();
        for page in &doc.pages {
            stats.add_page(page);
        }
        stats
    }

    /// Account for one page.
    pub fn add_page(&mut self, page: &Page) {
        self.page_count += 1;
        match &page.text {
            Some(text) => self.count_text(text),
            None => self.blank_page_count += 1,
        }
        for table in &page.tables {
            self.table_count += 1;
            self.table_row_count += table.row_count() as u32;
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
