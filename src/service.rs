//! Structured query payloads over a corpus.
//!
//! Each method validates its arguments before touching the filesystem and
//! returns a serde-serializable payload. Lookups that find no rule produce a
//! [`Judgement::Indeterminate`] payload rather than an error.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::catalog::{classify, Category, CorpusLayout, SourceListing};
use crate::error::{Error, Result};
use crate::rules::{
    best_row, check_threshold, evaluate, parse_calendar, query_events, CalendarQuery, CitedEvent,
    EarnedCredits, Judgement, LabeledCredits, MajorType, RuleCache, RuleRow, ThresholdCheck,
    ThresholdInput,
};
use crate::search::{build_terms, search_paths, EvidenceHit};

/// Citation format required in final answers.
pub const CITATION_RULE: &str = "최종 답변은 반드시 (문서명.pdf, p.N) 형식으로 표기";

/// Citation of the credit requirement table.
pub const CREDIT_TABLE_CITATION: &str = "(학점 이수 체계.pdf, p.1)";

/// Steps for answering a regulation question from the corpus.
pub const WORKFLOW: [&str; 4] = [
    "1) normalized-md에서 후보 규정 탐색",
    "2) law-topic-index/law-articles/law-numeric-rules 교차확인(학칙 질의 시)",
    "3) 필요 시 raw-md/학칙.raw.md 대조",
    "4) PDF 페이지 인용으로 최종 확정",
];

/// Sections of an answer.
pub const RESPONSE_TEMPLATE: [&str; 4] = ["결론", "근거", "계산/비교", "불확실성"];

const NO_MATCHING_ROW: &str = "학점 이수 체계 표에서 일치하는 대학/학과 행을 찾지 못함";

const GRADUATION_NOTES: [&str; 2] = [
    "교양필수/교양선택의 세부 과목 충족 여부는 교양 필수/선택 문서로 추가 확인 필요",
    "최종 졸업판정은 학칙 졸업요건 조문과 함께 검증 권장",
];

/// Category of a question and the documents to consult for it.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub question: String,
    pub category: Category,
    /// Keywords that decided the category
    pub matched_keywords: Vec<&'static str>,
    /// Existing corpus documents for the category, in priority order
    pub recommended_paths: Vec<PathBuf>,
}

/// Cited evidence lines found for a question.
#[derive(Debug, Clone, Serialize)]
pub struct EvidenceResponse {
    pub question: String,
    /// Category whose documents were searched
    pub category: Category,
    /// Terms extracted from the question
    pub search_terms: Vec<String>,
    /// Hits, highest score first
    pub hits: Vec<EvidenceHit>,
    pub citation_rule: &'static str,
}

/// Classification, evidence and answer outline for a question.
#[derive(Debug, Clone, Serialize)]
pub struct RuleBrief {
    pub question: String,
    pub category: Category,
    pub matched_keywords: Vec<&'static str>,
    /// Lookup steps to follow
    pub workflow: Vec<&'static str>,
    /// Answer sections
    pub response_template: Vec<&'static str>,
    pub evidence: Vec<EvidenceHit>,
}

/// Graduation evaluation payload.
///
/// Numeric sections are present only when the matched row permits the
/// requested major path.
#[derive(Debug, Clone, Serialize)]
pub struct GraduationReport {
    pub judgement: Judgement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_rule: Option<RuleRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<LabeledCredits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned: Option<LabeledCredits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<LabeledCredits>,
    pub citation: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<&'static str>,
}

impl GraduationReport {
    fn indeterminate(reason: &str) -> Self {
        Self {
            judgement: Judgement::Indeterminate,
            reason: Some(reason.to_string()),
            matched_rule: None,
            required: None,
            earned: None,
            gap: None,
            citation: CREDIT_TABLE_CITATION,
            notes: Vec::new(),
        }
    }
}

/// Calendar events selected by keyword and month.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarResponse {
    pub keyword: String,
    /// Month filter, if one was given
    pub month: Option<u32>,
    /// Number of events returned
    pub count: usize,
    pub events: Vec<CitedEvent>,
}

/// Query front end over a corpus layout.
#[derive(Debug, Clone, Default)]
pub struct Service {
    layout: CorpusLayout,
}

impl Service {
    /// Create a service over a corpus.
    pub fn new(layout: CorpusLayout) -> Self {
        Self { layout }
    }

    /// Get the corpus layout.
    pub fn layout(&self) -> &CorpusLayout {
        &self.layout
    }

    /// Classify a question and list the documents to consult.
    pub fn classify_request(&self, question: &str) -> ClassifyResponse {
        let classification = classify(question);
        ClassifyResponse {
            question: question.to_string(),
            category: classification.category,
            matched_keywords: classification.matched_keywords,
            recommended_paths: self.layout.category_paths(classification.category),
        }
    }

    /// Search the category's documents for lines matching the question.
    ///
    /// `category` is a label; when absent the question is classified.
    pub fn search_evidence(
        &self,
        question: &str,
        category: Option<&str>,
        max_hits: i64,
    ) -> Result<EvidenceResponse> {
        if max_hits < 1 {
            return Err(Error::invalid_argument(
                "max_hits",
                format!("must be >= 1, got {max_hits}"),
            ));
        }
        let category = match category {
            Some(label) => label.parse::<Category>()?,
            None => classify(question).category,
        };

        let search_terms = build_terms(question);
        let paths = self.layout.category_paths(category);
        let hits = search_paths(&paths, &search_terms, max_hits as usize)?;
        log::debug!(
            "{} hits for {:?} in {} documents",
            hits.len(),
            search_terms,
            paths.len()
        );

        Ok(EvidenceResponse {
            question: question.to_string(),
            category,
            search_terms,
            hits,
            citation_rule: CITATION_RULE,
        })
    }

    /// Classification, evidence and an answer outline in one payload.
    pub fn rule_brief(&self, question: &str, max_hits: i64) -> Result<RuleBrief> {
        let classification = classify(question);
        let evidence =
            self.search_evidence(question, Some(classification.category.label()), max_hits)?;

        Ok(RuleBrief {
            question: question.to_string(),
            category: classification.category,
            matched_keywords: classification.matched_keywords,
            workflow: WORKFLOW.to_vec(),
            response_template: RESPONSE_TEMPLATE.to_vec(),
            evidence: evidence.hits,
        })
    }

    /// Evaluate earned credits against the credit requirement table.
    pub fn evaluate_graduation(
        &self,
        college: &str,
        department: &str,
        major_type: &str,
        earned: &EarnedCredits,
    ) -> Result<GraduationReport> {
        let major_type: MajorType = major_type.parse()?;
        earned.validate()?;

        let rows = RuleCache::credit_rows(&self.layout.credit_table_path())?;
        let Some(found) = best_row(&rows, college, department) else {
            return Ok(GraduationReport::indeterminate(NO_MATCHING_ROW));
        };

        let evaluation = evaluate(&found.row, major_type, earned);
        let report = match (evaluation.required, evaluation.gaps) {
            (Some(required), Some(gaps)) => GraduationReport {
                judgement: evaluation.judgement,
                reason: None,
                matched_rule: Some(found.row),
                required: Some(required.labeled(major_type)),
                earned: Some(earned.labeled(major_type)),
                gap: Some(gaps.labeled(major_type)),
                citation: CREDIT_TABLE_CITATION,
                notes: GRADUATION_NOTES.to_vec(),
            },
            _ => GraduationReport {
                judgement: evaluation.judgement,
                reason: evaluation.reason,
                matched_rule: Some(found.row),
                required: None,
                earned: None,
                gap: None,
                citation: CREDIT_TABLE_CITATION,
                notes: Vec::new(),
            },
        };
        Ok(report)
    }

    /// List calendar events filtered by keyword and month.
    pub fn calendar_events(
        &self,
        keyword: &str,
        month: Option<i64>,
        limit: i64,
    ) -> Result<CalendarResponse> {
        let query = CalendarQuery::new(keyword, month, limit)?;
        let text = fs::read_to_string(self.layout.calendar_path())?;
        let events = query_events(&parse_calendar(&text), &query);

        Ok(CalendarResponse {
            keyword: keyword.to_string(),
            month: query.month(),
            count: events.len(),
            events,
        })
    }

    /// Compare values against caller-supplied scholarship minimums.
    pub fn check_scholarship(&self, input: &ThresholdInput) -> ThresholdCheck {
        check_threshold(input)
    }

    /// List the corpus documents.
    pub fn list_sources(&self) -> SourceListing {
        self.layout.list_sources()
    }
}
