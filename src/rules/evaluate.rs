//! Graduation credit evaluation against a matched rule row.

use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::table::{parse_credit, RuleRow};

/// Liberal arts required credits when the row leaves the cell blank.
pub const DEFAULT_LIBERAL_REQUIRED: i64 = 19;
/// Liberal arts elective credits when the row leaves the cell blank.
pub const DEFAULT_LIBERAL_ELECTIVE: i64 = 9;
/// Major foundation credits when the row leaves the cell blank.
pub const DEFAULT_MAJOR_BASIC: i64 = 0;
/// Graduation total when the row leaves the cell blank.
pub const DEFAULT_TOTAL: i64 = 133;

/// Cell value marking a major path as not offered.
pub const NOT_PERMITTED: &str = "불허";

const LIBERAL_REQUIRED: &str = "교양필수";
const LIBERAL_ELECTIVE: &str = "교양선택";
const MAJOR_BASIC: &str = "전공기초";
const TOTAL: &str = "졸업학점";

/// Major path of a student; each maps to a column of the credit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorType {
    /// Single major
    Single,
    /// Major with a minor
    Minor,
    /// Double major, primary side
    DoublePrimary,
    /// Double major, secondary side
    DoubleSecondary,
}

impl MajorType {
    /// All major types in table column order.
    pub const ALL: [MajorType; 4] = [
        MajorType::Single,
        MajorType::Minor,
        MajorType::DoublePrimary,
        MajorType::DoubleSecondary,
    ];

    /// Column label in the credit table.
    pub fn label(&self) -> &'static str {
        match self {
            MajorType::Single => "단일전공자",
            MajorType::Minor => "부전공자",
            MajorType::DoublePrimary => "복수전공자(주전공)",
            MajorType::DoubleSecondary => "복수전공자(복수전공)",
        }
    }
}

impl fmt::Display for MajorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MajorType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        MajorType::ALL
            .into_iter()
            .find(|major| major.label() == s)
            .ok_or_else(|| {
                Error::invalid_argument(
                    "major_type",
                    "major_type은 단일전공자/부전공자/복수전공자(주전공)/복수전공자(복수전공) 중 하나여야 함",
                )
            })
    }
}

impl Serialize for MajorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Judgement {
    /// All requirements are met
    #[serde(rename = "가능")]
    Eligible,
    /// At least one requirement is not met
    #[serde(rename = "불가")]
    Ineligible,
    /// The rule could not be determined
    #[serde(rename = "판정 불가")]
    Indeterminate,
}

impl Judgement {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Judgement::Eligible => "가능",
            Judgement::Ineligible => "불가",
            Judgement::Indeterminate => "판정 불가",
        }
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Credits per requirement category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Credits {
    /// 교양필수
    pub liberal_required: i64,
    /// 교양선택
    pub liberal_elective: i64,
    /// 전공기초
    pub major_basic: i64,
    /// Column of the evaluated major path
    pub major: i64,
    /// 졸업학점
    pub total: i64,
}

/// Credits a student has earned so far.
pub type EarnedCredits = Credits;

impl Credits {
    /// Reject negative counters.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("earned_liberal_required", self.liberal_required),
            ("earned_liberal_elective", self.liberal_elective),
            ("earned_major_basic", self.major_basic),
            ("earned_major", self.major),
            ("earned_total", self.total),
        ];
        for (name, value) in fields {
            if value < 0 {
                return Err(Error::invalid_argument(name, format!("must be >= 0, got {value}")));
            }
        }
        Ok(())
    }

    /// Shortfall of `earned` against these requirements, floored at zero.
    pub fn gaps(&self, earned: &Credits) -> Credits {
        Credits {
            liberal_required: (self.liberal_required - earned.liberal_required).max(0),
            liberal_elective: (self.liberal_elective - earned.liberal_elective).max(0),
            major_basic: (self.major_basic - earned.major_basic).max(0),
            major: (self.major - earned.major).max(0),
            total: (self.total - earned.total).max(0),
        }
    }

    /// Check if every category is zero.
    pub fn is_zero(&self) -> bool {
        *self == Credits::default()
    }

    /// Label the categories with table column names.
    pub fn labeled(&self, major_type: MajorType) -> LabeledCredits {
        LabeledCredits {
            credits: *self,
            major_type,
        }
    }
}

/// Credits keyed by table column names when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledCredits {
    pub credits: Credits,
    pub major_type: MajorType,
}

impl Serialize for LabeledCredits {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry(LIBERAL_REQUIRED, &self.credits.liberal_required)?;
        map.serialize_entry(LIBERAL_ELECTIVE, &self.credits.liberal_elective)?;
        map.serialize_entry(MAJOR_BASIC, &self.credits.major_basic)?;
        map.serialize_entry(self.major_type.label(), &self.credits.major)?;
        map.serialize_entry(TOTAL, &self.credits.total)?;
        map.end()
    }
}

/// Result of evaluating one rule row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub judgement: Judgement,
    pub major_type: MajorType,
    /// Requirements read from the row; `None` when the path is not permitted
    pub required: Option<Credits>,
    /// Remaining credits per category
    pub gaps: Option<Credits>,
    /// Why the judgement was reached, for non-numeric outcomes
    pub reason: Option<String>,
}

impl Evaluation {
    /// Check if every requirement is met.
    pub fn is_eligible(&self) -> bool {
        self.judgement == Judgement::Eligible
    }
}

/// Read requirements from a row, substituting defaults for blank cells.
pub fn required_credits(row: &RuleRow, major_type: MajorType) -> Credits {
    let cell = |column: &str, default: i64| parse_credit(row.value(column)).unwrap_or(default);
    Credits {
        liberal_required: cell(LIBERAL_REQUIRED, DEFAULT_LIBERAL_REQUIRED),
        liberal_elective: cell(LIBERAL_ELECTIVE, DEFAULT_LIBERAL_ELECTIVE),
        major_basic: cell(MAJOR_BASIC, DEFAULT_MAJOR_BASIC),
        major: cell(major_type.label(), 0),
        total: cell(TOTAL, DEFAULT_TOTAL),
    }
}

/// Evaluate earned credits against a rule row.
pub fn evaluate(row: &RuleRow, major_type: MajorType, earned: &EarnedCredits) -> Evaluation {
    if row.value(major_type.label()).trim() == NOT_PERMITTED {
        return Evaluation {
            judgement: Judgement::Ineligible,
            major_type,
            required: None,
            gaps: None,
            reason: Some(format!("{} 경로가 해당 학과에서 불허됨", major_type.label())),
        };
    }

    let required = required_credits(row, major_type);
    let gaps = required.gaps(earned);
    let judgement = if gaps.is_zero() {
        Judgement::Eligible
    } else {
        Judgement::Ineligible
    };

    Evaluation {
        judgement,
        major_type,
        required: Some(required),
        gaps: Some(gaps),
        reason: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer_science() -> RuleRow {
        RuleRow::from_pairs([
            ("대학", "IT대학"),
            ("학과/학부", "컴퓨터학부"),
            ("교양필수", "19"),
            ("교양선택", "9"),
            ("전공기초", "12"),
            ("단일전공자", "72"),
            ("부전공자", "불허"),
            ("졸업학점", "133"),
        ])
    }

    fn earned(values: [i64; 5]) -> EarnedCredits {
        Credits {
            liberal_required: values[0],
            liberal_elective: values[1],
            major_basic: values[2],
            major: values[3],
            total: values[4],
        }
    }

    #[test]
    fn test_major_type_parse() {
        assert_eq!("단일전공자".parse::<MajorType>().unwrap(), MajorType::Single);
        assert_eq!(
            " 복수전공자(복수전공) ".parse::<MajorType>().unwrap(),
            MajorType::DoubleSecondary
        );
        assert!(matches!(
            "전공자".parse::<MajorType>(),
            Err(Error::InvalidArgument { name: "major_type", .. })
        ));
    }

    #[test]
    fn test_eligible() {
        let result = evaluate(&computer_science(), MajorType::Single, &earned([19, 9, 12, 72, 133]));
        assert!(result.is_eligible());
        assert!(result.gaps.unwrap().is_zero());
    }

    #[test]
    fn test_gaps() {
        let result = evaluate(&computer_science(), MajorType::Single, &earned([19, 6, 12, 80, 120]));
        let gaps = result.gaps.unwrap();

        assert_eq!(result.judgement, Judgement::Ineligible);
        assert_eq!(gaps.liberal_elective, 3);
        assert_eq!(gaps.major, 0);
        assert_eq!(gaps.total, 13);
    }

    #[test]
    fn test_total_shortfall_then_met() {
        let short = evaluate(&computer_science(), MajorType::Single, &earned([19, 9, 12, 72, 130]));
        assert_eq!(short.judgement, Judgement::Ineligible);
        assert_eq!(short.gaps.unwrap().total, 3);

        let met = evaluate(&computer_science(), MajorType::Single, &earned([19, 9, 12, 72, 133]));
        assert_eq!(met.judgement, Judgement::Eligible);
        assert_eq!(met.gaps.unwrap().total, 0);
    }

    #[test]
    fn test_not_permitted_short_circuits() {
        let result = evaluate(&computer_science(), MajorType::Minor, &earned([99; 5]));

        assert_eq!(result.judgement, Judgement::Ineligible);
        assert!(result.gaps.is_none());
        assert_eq!(result.reason.as_deref(), Some("부전공자 경로가 해당 학과에서 불허됨"));
    }

    #[test]
    fn test_defaults_for_blank_cells() {
        let row = RuleRow::from_pairs([
            ("대학", "경영대학"),
            ("학과/학부", "전체"),
            ("교양필수", ""),
            ("교양선택", "-"),
            ("전공기초", "0"),
            ("단일전공자", "60"),
            ("졸업학점", ""),
        ]);
        let required = required_credits(&row, MajorType::Single);

        assert_eq!(required.liberal_required, 19);
        assert_eq!(required.liberal_elective, 9);
        assert_eq!(required.major_basic, 0);
        assert_eq!(required.major, 60);
        assert_eq!(required.total, 133);

        // Missing major column defaults to zero.
        assert_eq!(required_credits(&row, MajorType::DoublePrimary).major, 0);
    }

    #[test]
    fn test_explicit_zero_kept() {
        let row = RuleRow::from_pairs([("교양선택", "0"), ("졸업학점", "0")]);
        let required = required_credits(&row, MajorType::Single);
        assert_eq!(required.liberal_elective, 0);
        assert_eq!(required.total, 0);
    }

    #[test]
    fn test_validate_rejects_negative() {
        assert!(earned([0; 5]).validate().is_ok());
        assert!(matches!(
            earned([0, 0, -1, 0, 0]).validate(),
            Err(Error::InvalidArgument { name: "earned_major_basic", .. })
        ));
    }

    #[test]
    fn test_labeled_serialization() {
        let credits = earned([19, 9, 0, 36, 133]);
        let json = serde_json::to_string(&credits.labeled(MajorType::DoublePrimary)).unwrap();
        assert_eq!(
            json,
            r#"{"교양필수":19,"교양선택":9,"전공기초":0,"복수전공자(주전공)":36,"졸업학점":133}"#
        );
    }
}
