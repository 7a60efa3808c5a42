//! Citation hints for corpus documents.

use std::path::Path;

/// Hint used when a document has no known source mapping.
pub const UNKNOWN_SOURCE_HINT: &str = "(원문 PDF 페이지 확인 필요)";

/// Documents derived from the school regulations PDF.
const REGULATION_DOCUMENTS: [&str; 5] = [
    "학칙.md",
    "학칙.raw.md",
    "law-topic-index.md",
    "law-articles.md",
    "law-numeric-rules.md",
];

/// Build a `(document.pdf, p.N)` citation for a hit in `path`.
///
/// Documents without page-level anchoring cite their fixed page range.
pub fn citation_hint(path: &Path, page: Option<u32>) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    match name.as_ref() {
        n if REGULATION_DOCUMENTS.contains(&n) => paged("학칙.pdf", page),
        "학점 이수 체계.md" => "(학점 이수 체계.pdf, p.1)".to_string(),
        "교양 필수.md" => "(교양 필수.pdf, p.1~2)".to_string(),
        "교양 선택.md" => "(교양 선택.pdf, p.1~4)".to_string(),
        "학사 일정.md" => paged("학사 일정.pdf", page),
        _ => UNKNOWN_SOURCE_HINT.to_string(),
    }
}

/// Cite a page of `document`, or flag the page as unconfirmed.
pub fn paged(document: &str, page: Option<u32>) -> String {
    match page {
        Some(page) => format!("({document}, p.{page})"),
        None => format!("({document}, 페이지 확인 필요)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regulation_family() {
        for name in REGULATION_DOCUMENTS {
            let path = Path::new("knowledge").join(name);
            assert_eq!(citation_hint(&path, Some(14)), "(학칙.pdf, p.14)");
            assert_eq!(citation_hint(&path, None), "(학칙.pdf, 페이지 확인 필요)");
        }
    }

    #[test]
    fn test_fixed_ranges_ignore_page() {
        assert_eq!(
            citation_hint(Path::new("학점 이수 체계.md"), Some(9)),
            "(학점 이수 체계.pdf, p.1)"
        );
        assert_eq!(citation_hint(Path::new("a/교양 필수.md"), None), "(교양 필수.pdf, p.1~2)");
        assert_eq!(citation_hint(Path::new("a/교양 선택.md"), Some(2)), "(교양 선택.pdf, p.1~4)");
    }

    #[test]
    fn test_calendar_and_unknown() {
        assert_eq!(citation_hint(Path::new("학사 일정.md"), Some(3)), "(학사 일정.pdf, p.3)");
        assert_eq!(
            citation_hint(Path::new("학사 일정.md"), None),
            "(학사 일정.pdf, 페이지 확인 필요)"
        );
        assert_eq!(citation_hint(Path::new("refs/source-map.md"), Some(1)), UNKNOWN_SOURCE_HINT);
    }
}
