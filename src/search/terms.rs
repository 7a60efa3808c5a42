//! Query term extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Particles and request phrasing that carry no search value.
pub const STOP_TERMS: [&str; 16] = [
    "은", "는", "이", "가", "을", "를", "에", "의", "좀", "해줘", "가능", "여부", "알려줘", "확인",
    "하고", "또",
];

static TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[가-힣A-Za-z0-9]+").unwrap());

/// Split a question into lowercase search terms.
///
/// Terms are maximal runs of Hangul syllables and ASCII alphanumerics. Terms
/// shorter than two characters and stop terms are dropped; duplicates keep
/// their first position.
pub fn build_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for found in TERM.find_iter(query) {
        let term = found.as_str().to_lowercase();
        if term.chars().count() < 2 || STOP_TERMS.contains(&term.as_str()) {
            continue;
        }
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_terms() {
        assert_eq!(build_terms("휴학 가능 여부 알려줘"), vec!["휴학"]);
        assert_eq!(build_terms("GPA 3.5 threshold"), vec!["gpa", "threshold"]);
    }

    #[test]
    fn test_dedupe_keeps_first_position() {
        assert_eq!(
            build_terms("재수강 성적 재수강 Threshold threshold"),
            vec!["재수강", "성적", "threshold"]
        );
    }

    #[test]
    fn test_punctuation_splits_terms() {
        assert_eq!(
            build_terms("졸업요건(복수전공)은?"),
            vec!["졸업요건", "복수전공은"]
        );
    }

    #[test]
    fn test_empty_query() {
        assert!(build_terms("").is_empty());
        assert!(build_terms("? ! 은 는 a").is_empty());
    }
}
