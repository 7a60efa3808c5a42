//! Question categories and keyword classification.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Workflow category of a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// Regulation questions (leave of absence, dismissal, discipline, ...)
    #[default]
    RegulationQa,
    /// Graduation requirement checks
    Graduation,
    /// Course retake eligibility and impact
    Retake,
    /// Scholarship threshold comparison
    Scholarship,
    /// Registration and academic calendar help
    Registration,
}

impl Category {
    /// All categories in classification order.
    pub const ALL: [Category; 5] = [
        Category::RegulationQa,
        Category::Graduation,
        Category::Retake,
        Category::Scholarship,
        Category::Registration,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::RegulationQa => "학칙 Q&A",
            Category::Graduation => "졸업요건 판정",
            Category::Retake => "재수강 가능/영향 분석",
            Category::Scholarship => "장학 기준 역치 비교",
            Category::Registration => "수강신청/학사일정 보조",
        }
    }

    /// Keywords that vote for this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::RegulationQa => &[
                "학칙", "휴학", "복학", "제적", "자퇴", "전과", "다전공", "학사경고", "징계", "조문",
            ],
            Category::Graduation => &[
                "졸업", "졸업요건", "이수", "학점", "전공기초", "복수전공", "부전공",
            ],
            Category::Retake => &["재수강", "중복", "성적", "학점인정"],
            Category::Scholarship => &["장학", "장학금", "성적우수", "역치", "threshold"],
            Category::Registration => &[
                "수강신청", "학사일정", "정정", "취소", "신청기간", "등록금", "마감",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| Error::invalid_argument("category", format!("unknown category '{s}'")))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Category chosen for a question and the keywords that chose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub matched_keywords: Vec<&'static str>,
}

/// Classify a question by counting keyword hits per category.
///
/// The category with the most hits wins; on a tie the earlier category in
/// [`Category::ALL`] wins. Without any hit the question is a regulation
/// question with no matched keywords.
pub fn classify(question: &str) -> Classification {
    let question = question.to_lowercase();

    let mut best: Option<(Category, Vec<&'static str>)> = None;
    for category in Category::ALL {
        let hits: Vec<&'static str> = category
            .keywords()
            .iter()
            .copied()
            .filter(|keyword| question.contains(&keyword.to_lowercase()))
            .collect();
        if best.as_ref().map_or(true, |(_, best_hits)| hits.len() > best_hits.len()) {
            best = Some((category, hits));
        }
    }

    match best {
        Some((category, matched_keywords)) if !matched_keywords.is_empty() => Classification {
            category,
            matched_keywords,
        },
        _ => Classification {
            category: Category::RegulationQa,
            matched_keywords: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_graduation() {
        let result = classify("복수전공 졸업요건 학점 알려줘");
        assert_eq!(result.category, Category::Graduation);
        assert_eq!(result.matched_keywords, vec!["졸업", "졸업요건", "학점", "복수전공"]);
    }

    #[test]
    fn test_classify_case_insensitive_keyword() {
        let result = classify("Scholarship THRESHOLD 비교");
        assert_eq!(result.category, Category::Scholarship);
        assert_eq!(result.matched_keywords, vec!["threshold"]);
    }

    #[test]
    fn test_tie_goes_to_earlier_category() {
        // One regulation keyword and one graduation keyword.
        let result = classify("휴학하면 졸업 늦어지나요");
        assert_eq!(result.category, Category::RegulationQa);
        assert_eq!(result.matched_keywords, vec!["휴학"]);
    }

    #[test]
    fn test_no_keywords() {
        let result = classify("오늘 날씨 어때");
        assert_eq!(result.category, Category::RegulationQa);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert!(matches!(
            "기타".parse::<Category>(),
            Err(Error::InvalidArgument { name: "category", .. })
        ));
    }
}
