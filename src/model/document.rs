//! Document-level types.

use super::Page;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A page-indexed document assembled from one extraction stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssembledDocument {
    /// Document metadata (title, source, generation time)
    pub metadata: Metadata,

    /// Pages in source order
    pub pages: Vec<Page>,
}

impl AssembledDocument {
    /// Create an empty document with the given metadata.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document and keep the page count in sync.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
        self.metadata.page_count = self.pages.len() as u32;
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of tables across all pages.
    pub fn table_count(&self) -> usize {
        self.pages.iter().map(Page::table_count).sum()
    }
}

/// Document metadata written as front matter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title (the source file stem)
    pub title: String,

    /// Source path as given to the converter
    pub source: String,

    /// When the document was generated
    pub generated_at: DateTime<Utc>,

    /// Total number of pages
    pub page_count: u32,
}

impl Metadata {
    /// Create metadata stamped with the current time.
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            generated_at: Utc::now(),
            page_count: 0,
        }
    }

    /// Override the generation timestamp.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Generation timestamp in RFC 3339 with microseconds and a `+00:00` offset.
    pub fn generated_at_string(&self) -> String {
        self.generated_at
            .to_rfc3339_opts(SecondsFormat::Micros, false)
    }

    /// Render the title line and labeled key-value lines.
    pub fn to_front_matter(&self) -> Vec<String> {
        vec![
            format!("# {}", self.title),
            String::new(),
            format!("- source_pdf: `{}`", self.source),
            format!("- generated_at_utc: `{}`", self.generated_at_string()),
            format!("- total_pages: `{}`", self.page_count),
            String::new(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_new() {
        let doc = AssembledDocument::default();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert!(doc.get_page(0).is_none());
    }

    #[test]
    fn test_add_page_updates_count() {
        let mut doc = AssembledDocument::new(Metadata::new("학칙", "docs/학칙.pdf"));
        doc.add_page(Page::blank(1));
        doc.add_page(Page::blank(2));

        assert_eq!(doc.metadata.page_count, 2);
        assert_eq!(doc.get_page(2).map(|p| p.number), Some(2));
        assert!(doc.get_page(3).is_none());
    }

    #[test]
    fn test_front_matter() {
        let generated_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let mut metadata =
            Metadata::new("학사 일정", "/data/docs/학사 일정.pdf").with_generated_at(generated_at);
        metadata.page_count = 4;

        let lines = metadata.to_front_matter();
        assert_eq!(lines[0], "# 학사 일정");
        assert_eq!(lines[2], "- source_pdf: `/data/docs/학사 일정.pdf`");
        assert_eq!(
            lines[3],
            "- generated_at_utc: `2025-03-01T09:30:00.000000+00:00`"
        );
        assert_eq!(lines[4], "- total_pages: `4`");
    }
}
