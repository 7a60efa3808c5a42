//! Scholarship threshold comparison.
//!
//! The corpus holds no quantitative scholarship criteria, so a comparison is
//! only possible against minimums the caller supplies.

use serde::{Deserialize, Serialize};

use super::evaluate::Judgement;

/// Values to compare; any of them may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdInput {
    pub gpa: Option<f64>,
    pub earned_credits: Option<i64>,
    pub min_gpa: Option<f64>,
    pub min_credits: Option<i64>,
}

/// Differences between supplied values and their minimums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ThresholdGaps {
    /// `gpa - min_gpa`, rounded to three decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa_gap: Option<f64>,
    /// `earned_credits - min_credits`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_gap: Option<i64>,
}

/// Result of a threshold check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdCheck {
    pub judgement: Judgement,
    pub input: ThresholdInput,
    pub gap: ThresholdGaps,
    /// Set when no minimum was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

/// Compare values against caller-supplied minimums.
///
/// Without any minimum the result is [`Judgement::Indeterminate`]. Otherwise
/// each supplied minimum must be met by a supplied value.
pub fn check_threshold(input: &ThresholdInput) -> ThresholdCheck {
    if input.min_gpa.is_none() && input.min_credits.is_none() {
        return ThresholdCheck {
            judgement: Judgement::Indeterminate,
            input: *input,
            gap: ThresholdGaps::default(),
            reason: Some("현재 docs 묶음에는 장학금 정량 선발기준 문서가 없음".to_string()),
            required_action: Some("장학 규정 PDF/URL 제공 필요".to_string()),
            citation: Some("(학칙.pdf, p.14) + source-map known gap".to_string()),
            notes: Vec::new(),
        };
    }

    let gap = ThresholdGaps {
        gpa_gap: input
            .gpa
            .zip(input.min_gpa)
            .map(|(gpa, min)| round3(gpa - min)),
        credit_gap: input
            .earned_credits
            .zip(input.min_credits)
            .map(|(earned, min)| earned - min),
    };

    let meets_gpa = input
        .min_gpa
        .map_or(true, |min| input.gpa.is_some_and(|gpa| gpa >= min));
    let meets_credits = input
        .min_credits
        .map_or(true, |min| input.earned_credits.is_some_and(|earned| earned >= min));

    ThresholdCheck {
        judgement: if meets_gpa && meets_credits {
            Judgement::Eligible
        } else {
            Judgement::Ineligible
        },
        input: *input,
        gap,
        reason: None,
        required_action: None,
        citation: None,
        notes: vec![
            "이 결과는 사용자가 제공한 역치 기준값에 대한 비교임".to_string(),
            "학교 공식 장학 세부기준 문서로 최종 확인 필요".to_string(),
        ],
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
