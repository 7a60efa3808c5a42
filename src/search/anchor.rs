//! Page anchors in assembled Markdown.
//!
//! Assembled documents mark each page with a `## p.N` heading. Every line
//! after a marker belongs to that page until the next marker.

use once_cell::sync::Lazy;
use regex::Regex;

static PAGE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^## p\.(\d+)").unwrap());

/// A line of a document together with the page it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchoredLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Line text as stored
    pub text: &'a str,
    /// Page of the most recent marker, `None` before the first one
    pub page: Option<u32>,
}

/// Check whether a line is a page marker, ignoring surrounding whitespace.
pub fn is_page_marker(line: &str) -> bool {
    PAGE_MARKER.is_match(line.trim())
}

/// Parse a page marker line, ignoring surrounding whitespace.
///
/// A marker whose number does not fit in `u32` yields `None`.
pub fn parse_page_marker(line: &str) -> Option<u32> {
    PAGE_MARKER
        .captures(line.trim())
        .and_then(|caps| caps[1].parse().ok())
}

/// Page after reading `line`: a marker replaces the current page, even when
/// its number cannot be read.
pub(crate) fn advance_page(current: Option<u32>, line: &str) -> Option<u32> {
    if is_page_marker(line) {
        parse_page_marker(line)
    } else {
        current
    }
}

/// Iterate over the lines of `text` with their page anchor.
pub fn scan_lines(text: &str) -> impl Iterator<Item = AnchoredLine<'_>> {
    let mut page = None;
    text.lines().enumerate().map(move |(idx, line)| {
        page = advance_page(page, line);
        AnchoredLine {
            number: idx + 1,
            text: line,
            page,
        }
    })
}
