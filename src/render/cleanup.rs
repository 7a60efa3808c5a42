//! Line-level text cleanup for extracted page text.
//!
//! Layout-mode extraction leaves decorative glyphs, odd range separators and
//! uneven spacing behind. These helpers turn one line (or one page) into the
//! normalized form that is written to the `### text` section and into table
//! cells.

use once_cell::sync::Lazy;
use regex::Regex;

/// Glyphs that carry no meaning in extracted text and become plain spaces.
const NOISE_GLYPHS: [char; 5] = ['\u{00A0}', '!', '%', '&', '*'];

/// Separator the extractor emits between the two ends of a numeric range.
static RANGE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\s*\$\s*(\d)").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Replace noise glyphs with spaces, leaving all other spacing untouched.
///
/// Table detection uses this instead of [`normalize`] so that column gaps
/// survive.
pub fn replace_noise(line: &str) -> String {
    line.chars()
        .map(|c| if NOISE_GLYPHS.contains(&c) { ' ' } else { c })
        .collect()
}

/// Normalize a single line of extracted text.
///
/// - noise glyphs become spaces
/// - `12 $ 5` becomes `12-5`
/// - `#` becomes `", "`
/// - whitespace runs collapse to one space and the result is trimmed
///
/// The function is idempotent.
pub fn normalize(line: &str) -> String {
    let mut result = replace_noise(line);

    // A chain like "1 $ 2 $ 3" shares its middle digit between two matches,
    // so rewrite until nothing is left to rewrite.
    while RANGE_SEPARATOR.is_match(&result) {
        result = RANGE_SEPARATOR.replace_all(&result, "$1-$2").into_owned();
    }

    let result = result.replace('#', ", ");
    WHITESPACE_RUN.replace_all(&result, " ").trim().to_string()
}

/// Normalize a block of text line by line.
///
/// Runs of blank lines collapse to a single empty line and leading or
/// trailing blank lines are dropped.
pub fn normalize_block(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let mut lines: Vec<String> = Vec::new();

    for raw_line in text.lines() {
        let line = normalize(raw_line);
        if line.is_empty() {
            if lines.last().is_some_and(|last| !last.is_empty()) {
                lines.push(String::new());
            }
            continue;
        }
        lines.push(line);
    }

    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}
