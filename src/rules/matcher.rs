//! Partial-key matching of college and department against rule rows.

use serde::Serialize;

use super::table::RuleRow;

const COLLEGE_COLUMN: &str = "대학";
const DEPARTMENT_COLUMN: &str = "학과/학부";

/// The best-scoring row for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    /// Matched row
    pub row: RuleRow,
    /// Match score (higher is more specific)
    pub score: i32,
}

/// Score how well a row matches, or `None` when the college does not match.
///
/// College: exact 20, substring 12. Department: exact 20, substring 14, a
/// row covering the whole college (`전체`) 8, a row for "others" (`외`) 6,
/// and 4 when no department was given.
pub fn score_row(row: &RuleRow, college: &str, department: &str) -> Option<i32> {
    let row_college = row.value(COLLEGE_COLUMN).trim();
    let row_department = row.value(DEPARTMENT_COLUMN).trim();
    if row_college.is_empty() {
        return None;
    }

    let mut score = if row_college == college {
        20
    } else if !college.is_empty() && row_college.contains(college) {
        12
    } else {
        return None;
    };

    score += if row_department == department {
        20
    } else if !department.is_empty() && row_department.contains(department) {
        14
    } else if row_department.contains("전체") {
        8
    } else if row_department.contains('외') {
        6
    } else if department.is_empty() {
        4
    } else {
        0
    };
    Some(score)
}

/// Pick the highest-scoring row. The first row wins ties.
pub fn best_row(rows: &[RuleRow], college: &str, department: &str) -> Option<RuleMatch> {
    let college = college.trim();
    let department = department.trim();

    let mut best: Option<(i32, &RuleRow)> = None;
    for row in rows {
        let Some(score) = score_row(row, college, department) else {
            continue;
        };
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, row));
        }
    }

    best.map(|(score, row)| {
        log::debug!("Best rule row for {college}/{department}: score {score}");
        RuleMatch {
            row: row.clone(),
            score,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(college: &str, department: &str) -> RuleRow {
        RuleRow::from_pairs([("대학", college), ("학과/학부", department)])
    }

    fn rows() -> Vec<RuleRow> {
        vec![
            row("IT대학", "전체"),
            row("IT대학", "컴퓨터학부"),
            row("IT대학", "소프트웨어학부 외"),
            row("경영대학", "경영학부"),
        ]
    }

    #[test]
    fn test_exact_match() {
        let found = best_row(&rows(), "IT대학", "컴퓨터학부").unwrap();
        assert_eq!(found.score, 40);
        assert_eq!(found.row.value("학과/학부"), "컴퓨터학부");
    }

    #[test]
    fn test_department_substring() {
        let found = best_row(&rows(), " IT대학 ", "소프트웨어").unwrap();
        assert_eq!(found.score, 34);
        assert_eq!(found.row.value("학과/학부"), "소프트웨어학부 외");
    }

    #[test]
    fn test_unknown_department_prefers_whole_college_row() {
        let found = best_row(&rows(), "IT대학", "전자정보공학부").unwrap();
        assert_eq!(found.score, 28);
        assert_eq!(found.row.value("학과/학부"), "전체");
    }

    #[test]
    fn test_college_substring() {
        let found = best_row(&rows(), "경영", "경영학부").unwrap();
        assert_eq!(found.score, 32);
    }

    #[test]
    fn test_empty_department() {
        let rows = vec![row("공과대학", "기계공학부"), row("공과대학", "화학공학과")];
        let found = best_row(&rows, "공과대학", "").unwrap();
        assert_eq!(found.score, 24);
        assert_eq!(found.row.value("학과/학부"), "기계공학부");
    }

    #[test]
    fn test_no_college_match() {
        assert!(best_row(&rows(), "인문대학", "국어국문학과").is_none());
        assert!(best_row(&rows(), "", "컴퓨터학부").is_none());
        assert!(best_row(&[], "IT대학", "").is_none());
    }

    #[test]
    fn test_exact_row_beats_substring_catch_all() {
        let exact = row("공과대학", "기계공학부");
        let catch_all = row("공과대학원", "전체");
        assert_eq!(score_row(&catch_all, "공과대학", "기계공학부"), Some(20));

        let found = best_row(&[catch_all, exact], "공과대학", "기계공학부").unwrap();
        assert_eq!(found.score, 40);
        assert_eq!(found.row.value("대학"), "공과대학");
    }

    #[test]
    fn test_first_row_wins_ties() {
        let rows = vec![row("IT대학", "A"), row("IT대학", "B")];
        let found = best_row(&rows, "IT대학", "C").unwrap();
        assert_eq!(found.score, 20);
        assert_eq!(found.row.value("학과/학부"), "A");
    }
}
