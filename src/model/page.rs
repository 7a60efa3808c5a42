//! Page-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// A single page of an assembled document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Text of the page as the extractor produced it
    #[serde(default, skip_serializing)]
    pub raw_text: String,

    /// Tables detected on the page, in detection order
    pub tables: Vec<Table>,

    /// Normalized prose, or `None` for a blank page
    pub text: Option<String>,
}

impl Page {
    /// Create a page with no content yet.
    pub fn new(number: u32, raw_text: impl Into<String>) -> Self {
        Self {
            number,
            raw_text: raw_text.into(),
            tables: Vec::new(),
            text: None,
        }
    }

    /// Create a blank page.
    pub fn blank(number: u32) -> Self {
        Self::new(number, String::new())
    }

    /// Add a table to the page.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Set the normalized prose of the page.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check if the page had no extractable text.
    pub fn is_blank(&self) -> bool {
        self.text.is_none()
    }

    /// Get the number of tables on the page.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}
