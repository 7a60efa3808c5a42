//! Table types.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Label of the first synthesized header column.
pub const SYNTHESIZED_FIRST_HEADER: &str = "항목";

/// Prefix of the remaining synthesized header columns (`값1`, `값2`, ...).
pub const SYNTHESIZED_VALUE_PREFIX: &str = "값";

/// A run of consecutive lines that looked tabular on a page.
///
/// Rows may have different cell counts; they are padded only when the block
/// is turned into a [`Table`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    /// Rows of cell strings in page order
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    /// Create a block from rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Create a block from string literals.
    pub fn from_strings<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Add a row to the block.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the largest cell count across rows.
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the block is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table block with a header decision applied, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// 1-based position of the table on its page
    pub index: usize,

    /// Header cells
    pub header: Vec<String>,

    /// Data rows, padded to the header width
    pub rows: Vec<Vec<String>>,

    /// Whether the header was synthesized rather than taken from the block
    pub header_synthesized: bool,
}

impl Table {
    /// Build a table from a detected block.
    ///
    /// Every row is padded to the block's widest row. The first row becomes
    /// the header when none of its cells contains a digit and at least one
    /// more row follows; otherwise a `항목, 값1..` header is synthesized and
    /// all rows are data.
    pub fn from_block(block: &TableBlock, index: usize) -> Self {
        let width = block.max_columns();
        let mut padded: Vec<Vec<String>> = block
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(width, String::new());
                row
            })
            .collect();

        let first_row_has_digit = padded
            .first()
            .is_some_and(|row| row.iter().any(|cell| has_digit(cell)));

        if !first_row_has_digit && padded.len() >= 2 {
            let header = padded.remove(0);
            Self {
                index,
                header,
                rows: padded,
                header_synthesized: false,
            }
        } else {
            Self {
                index,
                header: synthesized_header(width),
                rows: padded,
                header_synthesized: true,
            }
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Get the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Header used when a block has no usable header row.
pub fn synthesized_header(width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    std::iter::once(SYNTHESIZED_FIRST_HEADER.to_string())
        .chain((1..width).map(|i| format!("{SYNTHESIZED_VALUE_PREFIX}{i}")))
        .collect()
}

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

/// Check whether a cell carries a decimal digit (any script).
pub(crate) fn has_digit(cell: &str) -> bool {
    DIGIT.is_match(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_shape() {
        let block = TableBlock::from_strings([vec!["a", "b", "c"], vec!["d", "e"]]);
        assert_eq!(block.row_count(), 2);
        assert_eq!(block.max_columns(), 3);
        assert!(TableBlock::default().is_empty());
    }

    #[test]
    fn test_header_from_first_row() {
        let block = TableBlock::from_strings([
            vec!["Year", "Q1", "Q2"],
            vec!["2023", "10", "20"],
            vec!["2024", "15", "25"],
        ]);
        let table = Table::from_block(&block, 1);

        assert!(!table.header_synthesized);
        assert_eq!(table.header, vec!["Year", "Q1", "Q2"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_synthesized_header_for_numeric_rows() {
        let block = TableBlock::from_strings([
            vec!["10", "20", "30"],
            vec!["11", "21", "31"],
            vec!["12", "22", "32"],
        ]);
        let table = Table::from_block(&block, 2);

        assert!(table.header_synthesized);
        assert_eq!(table.header, vec!["항목", "값1", "값2"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.index, 2);
    }

    #[test]
    fn test_rows_padded_to_widest() {
        let block = TableBlock::from_strings([
            vec!["구분", "학점", "비고"],
            vec!["교양", "19"],
            vec!["전공", "60", "필수", "추가"],
        ]);
        let table = Table::from_block(&block, 1);

        assert_eq!(table.column_count(), 4);
        assert_eq!(table.header, vec!["구분", "학점", "비고", ""]);
        assert!(table.rows.iter().all(|row| row.len() == 4));
        assert_eq!(table.rows[0], vec!["교양", "19", "", ""]);
    }

    #[test]
    fn test_single_row_block_uses_synthesized_header() {
        let block = TableBlock::from_strings([vec!["a", "b", "c"]]);
        let table = Table::from_block(&block, 1);
        assert!(table.header_synthesized);
        assert_eq!(table.row_count(), 1);
    }
}
