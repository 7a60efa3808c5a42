//! Table detection over layout-mode text lines.
//!
//! Layout extraction lines up table columns with runs of spaces. A line is a
//! table row candidate when it splits into enough cells that look like data;
//! runs of consecutive candidates become [`TableBlock`]s.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{has_digit, TableBlock};
use crate::render::{normalize, replace_noise};

/// Column gap: two or more whitespace characters.
static COLUMN_GAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Table detector configuration.
#[derive(Debug, Clone)]
pub struct TableDetectorConfig {
    /// Minimum number of rows to keep a block
    pub min_rows: usize,
    /// Minimum cell count of the widest row
    pub min_columns: usize,
    /// Maximum cell count of the widest row (above this, likely prose split on spacing)
    pub max_columns: usize,
    /// Cells up to this many characters count as short
    pub short_cell_chars: usize,
    /// Number of short cells that makes a digit-free line a row
    pub min_short_cells: usize,
}

impl Default for TableDetectorConfig {
    fn default() -> Self {
        Self {
            min_rows: 3,
            min_columns: 3,
            max_columns: 10,
            short_cell_chars: 4,
            min_short_cells: 2,
        }
    }
}

impl TableDetectorConfig {
    /// Set the minimum number of rows.
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }
}

/// Detects table blocks in the text of a single page.
#[derive(Debug, Clone, Default)]
pub struct TableDetector {
    config: TableDetectorConfig,
}

impl TableDetector {
    /// Create a new table detector with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new table detector with custom configuration.
    pub fn with_config(config: TableDetectorConfig) -> Self {
        Self { config }
    }

    /// Get the detector configuration.
    pub fn config(&self) -> &TableDetectorConfig {
        &self.config
    }

    /// Check whether a split line qualifies as a table row.
    ///
    /// Requires at least `min_columns` cells and either a digit somewhere or
    /// at least `min_short_cells` short cells.
    pub fn looks_like_table_row(&self, cells: &[String]) -> bool {
        if cells.len() < self.config.min_columns {
            return false;
        }
        if cells.iter().any(|cell| has_digit(cell)) {
            return true;
        }
        let short_cells = cells
            .iter()
            .filter(|cell| cell.chars().count() <= self.config.short_cell_chars)
            .count();
        short_cells >= self.config.min_short_cells
    }

    /// Check whether an accumulated run of rows is kept as a table block.
    pub fn retain_block(&self, block: &TableBlock) -> bool {
        if block.row_count() < self.config.min_rows {
            log::debug!(
                "TableDetector: dropping block, not enough rows ({} < {})",
                block.row_count(),
                self.config.min_rows
            );
            return false;
        }

        let width = block.max_columns();
        if width < self.config.min_columns || width > self.config.max_columns {
            log::debug!(
                "TableDetector: dropping block, {} columns outside [{}, {}]",
                width,
                self.config.min_columns,
                self.config.max_columns
            );
            return false;
        }

        true
    }

    /// Detect table blocks in page text, in page order.
    pub fn detect(&self, page_text: &str) -> Vec<TableBlock> {
        let mut blocks = Vec::new();
        let mut current = TableBlock::default();

        for line in page_text.lines() {
            let cells = split_columns(line);
            if self.looks_like_table_row(&cells) {
                current.push_row(cells);
                continue;
            }
            if !current.is_empty() {
                self.close_block(std::mem::take(&mut current), &mut blocks);
            }
        }
        if !current.is_empty() {
            self.close_block(current, &mut blocks);
        }

        log::debug!("TableDetector: {} table blocks detected", blocks.len());
        blocks
    }

    fn close_block(&self, block: TableBlock, blocks: &mut Vec<TableBlock>) {
        if self.retain_block(&block) {
            log::debug!(
                "TableDetector: keeping block with {} rows x {} columns",
                block.row_count(),
                block.max_columns()
            );
            blocks.push(block);
        }
    }
}

/// Split a layout line into normalized cells.
///
/// Noise glyphs are blanked first so that they widen column gaps instead of
/// joining cells; empty cells are dropped.
pub fn split_columns(line: &str) -> Vec<String> {
    let cleaned = replace_noise(line);
    COLUMN_GAP
        .split(cleaned.trim())
        .filter(|part| !part.trim().is_empty())
        .map(normalize)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Detect table blocks with the default configuration.
pub fn detect_tables(page_text: &str) -> Vec<TableBlock> {
    TableDetector::new().detect(page_text)
}
