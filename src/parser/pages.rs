//! Page splitting for extractor output.

/// Form feed, emitted by the extractor after every page.
pub const PAGE_BREAK: char = '\u{000C}';

/// Split an extraction stream into per-page text.
///
/// Interior blank pages are kept as empty entries so page ordinals stay
/// aligned with the source; only a blank segment after the final page break
/// is dropped.
pub fn split_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
    if pages.last().is_some_and(|last| last.trim().is_empty()) {
        pages.pop();
    }
    pages
}
