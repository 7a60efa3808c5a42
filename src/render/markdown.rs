//! Page-indexed Markdown assembly.
//!
//! Every page becomes a `## p.N` section holding its detected tables and its
//! normalized prose, so a line found later by a search can always be traced
//! back to the page it came from.

use rayon::prelude::*;

use crate::model::{AssembledDocument, Metadata, Page, Table};
use crate::parser::TableDetector;

use super::{normalize_block, RenderOptions};

/// Placeholder written for pages without text.
pub const BLANK_PAGE: &str = "(blank page)";

/// Assemble page texts into a document.
pub fn assemble(
    title: impl Into<String>,
    source: impl Into<String>,
    pages: &[String],
    options: &RenderOptions,
) -> AssembledDocument {
    let mut metadata = Metadata::new(title, source);
    if let Some(generated_at) = options.generated_at {
        metadata = metadata.with_generated_at(generated_at);
    }

    let detector = TableDetector::with_config(options.table_config.clone());
    let build = |(idx, text): (usize, &String)| {
        build_page(idx as u32 + 1, text, options.detect_tables.then_some(&detector))
    };

    // Indexed collect keeps page order regardless of scheduling.
    let built: Vec<Page> = if options.parallel {
        pages.par_iter().enumerate().map(build).collect()
    } else {
        pages.iter().enumerate().map(build).collect()
    };

    let mut doc = AssembledDocument::new(metadata);
    for page in built {
        doc.add_page(page);
    }
    log::debug!(
        "Assembled {} pages with {} tables",
        doc.page_count(),
        doc.table_count()
    );
    doc
}

/// Assemble page texts and render them with default options.
pub fn assemble_markdown(
    title: impl Into<String>,
    source: impl Into<String>,
    pages: &[String],
) -> String {
    let doc = assemble(title, source, pages, &RenderOptions::default());
    MarkdownRenderer::new().render(&doc)
}

fn build_page(number: u32, raw_text: &str, detector: Option<&TableDetector>) -> Page {
    let page_text = raw_text.trim_matches('\n');
    if page_text.trim().is_empty() {
        return Page::new(number, raw_text);
    }

    let mut page = Page::new(number, raw_text).with_text(normalize_block(page_text));
    if let Some(detector) = detector {
        for (i, block) in detector.detect(page_text).iter().enumerate() {
            page.add_table(Table::from_block(block, i + 1));
        }
    }
    page
}

/// Render a table as a titled Markdown pipe table.
pub fn render_table(table: &Table) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.rows.len() + 5);
    lines.push(format!("### table-{}", table.index));
    lines.push(String::new());
    lines.push(pipe_row(&table.header));
    lines.push(format!(
        "| {} |",
        vec!["---"; table.column_count()].join(" | ")
    ));
    for row in &table.rows {
        lines.push(pipe_row(row));
    }
    lines.push(String::new());
    lines
}

fn pipe_row(cells: &[String]) -> String {
    let cells: Vec<String> = cells.iter().map(|cell| escape_cell(cell)).collect();
    format!("| {} |", cells.join(" | "))
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").trim().to_string()
}

/// Markdown renderer for assembled documents.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render a document to page-indexed Markdown.
    ///
    /// The result is right-trimmed and ends with exactly one newline.
    pub fn render(&self, doc: &AssembledDocument) -> String {
        let mut lines = doc.metadata.to_front_matter();
        for page in &doc.pages {
            self.render_page(&mut lines, page);
        }

        let mut output = lines.join("\n").trim_end().to_string();
        output.push('\n');
        output
    }

    fn render_page(&self, lines: &mut Vec<String>, page: &Page) {
        lines.push(format!("## p.{}", page.number));
        lines.push(String::new());

        let Some(text) = &page.text else {
            push_fenced(lines, BLANK_PAGE);
            return;
        };

        if !page.tables.is_empty() {
            lines.push("### tables".to_string());
            lines.push(String::new());
            for table in &page.tables {
                lines.extend(render_table(table));
            }
        }

        lines.push("### text".to_string());
        lines.push(String::new());
        push_fenced(lines, if text.is_empty() { BLANK_PAGE } else { text });
    }
}

fn push_fenced(lines: &mut Vec<String>, body: &str) {
    lines.push("```text".to_string());
    lines.push(body.to_string());
    lines.push("```".to_string());
    lines.push(String::new());
}
