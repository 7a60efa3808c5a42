//! Markdown pipe-table rows keyed by header.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Leading header columns of the credit requirement table.
pub const CREDIT_TABLE_COLUMNS: [&str; 2] = ["대학", "학과/학부"];

/// One table row as `(column, value)` pairs in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleRow {
    cells: Vec<(String, String)>,
}

impl RuleRow {
    /// Pair header columns with row values.
    pub fn new(header: &[String], values: Vec<String>) -> Self {
        Self {
            cells: header.iter().cloned().zip(values).collect(),
        }
    }

    /// Build a row from literal pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get the value of a column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Get the value of a column, or an empty string when absent.
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Iterate over `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for RuleRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Split a pipe-table line into trimmed cells.
///
/// Outer pipes are optional. `\|` inside a cell is a literal pipe.
pub fn split_table_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let body = line.strip_prefix('|').unwrap_or(line);
    let body = match body.strip_suffix('|') {
        Some(rest) if !rest.ends_with('\\') => rest,
        _ => body,
    };

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);

    cells.into_iter().map(|cell| cell.trim().to_string()).collect()
}

/// Load the credit requirement table from a Markdown document.
pub fn load_rows(markdown: &str) -> Vec<RuleRow> {
    load_rows_with_header(markdown, &CREDIT_TABLE_COLUMNS)
}

/// Load the first table whose header starts with `leading` columns.
///
/// The line after the header is the separator. Non-table lines before the
/// first data row are skipped; after it, the first one ends the table. Rows
/// with a cell count different from the header are dropped. Without a
/// matching header the result is empty.
pub fn load_rows_with_header(markdown: &str, leading: &[&str]) -> Vec<RuleRow> {
    let prefix = format!("| {} |", leading.join(" | "));
    let lines: Vec<&str> = markdown.lines().collect();

    let Some(start) = lines
        .iter()
        .position(|line| line.trim().starts_with(&prefix))
    else {
        log::debug!("No table starting with {prefix}");
        return Vec::new();
    };

    let header = split_table_row(lines[start]);
    let mut rows = Vec::new();
    for line in lines.iter().skip(start + 2) {
        let line = line.trim();
        if !line.starts_with('|') {
            if rows.is_empty() {
                continue;
            }
            break;
        }

        let cells = split_table_row(line);
        if cells.len() != header.len() {
            log::debug!(
                "Skipping row with {} cells (header has {})",
                cells.len(),
                header.len()
            );
            continue;
        }
        rows.push(RuleRow::new(&header, cells));
    }
    rows
}

/// Parse a credit cell.
///
/// Blank, `-` and `불허` cells carry no number; otherwise the first run of
/// ASCII digits is used.
pub fn parse_credit(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if cell.is_empty() || cell == "-" || cell == "불허" {
        return None;
    }
    let start = cell.find(|c: char| c.is_ascii_digit())?;
    let digits: String = cell[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
