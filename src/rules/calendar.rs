//! Academic calendar table queries.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::search::anchor::advance_page;
use crate::search::citation::paged;

use super::table::split_table_row;

/// Source PDF of the calendar document.
pub const CALENDAR_PDF: &str = "학사 일정.pdf";

const CALENDAR_HEADER: &str = "| 기간 | 일정 |";
const CALENDAR_SEPARATOR: &str = "| --- | --- |";

static PERIOD_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{2})-[0-9]{2}").unwrap());

/// One row of a calendar table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// Date or date range as written in the table
    #[serde(rename = "기간")]
    pub period: String,
    /// Event description
    #[serde(rename = "일정")]
    pub event: String,
    /// Page the row appeared on
    pub page: Option<u32>,
}

impl CalendarEvent {
    /// Month of the first `MM-DD` in the period.
    pub fn month(&self) -> Option<u32> {
        extract_month(&self.period)
    }

    /// Citation of the page the row appeared on.
    pub fn citation(&self) -> String {
        paged(CALENDAR_PDF, self.page)
    }
}

/// A calendar event selected by a query, with its citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitedEvent {
    #[serde(rename = "기간")]
    pub period: String,
    #[serde(rename = "일정")]
    pub event: String,
    pub citation: String,
}

/// Filters for [`query_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarQuery {
    keyword: String,
    month: Option<u32>,
    limit: usize,
}

impl Default for CalendarQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            month: None,
            limit: 20,
        }
    }
}

impl CalendarQuery {
    /// Validate a query. Months must be 1..=12; a limit below 1 counts as 1.
    pub fn new(keyword: impl Into<String>, month: Option<i64>, limit: i64) -> Result<Self> {
        let month = match month {
            Some(m) if (1..=12).contains(&m) => Some(m as u32),
            Some(m) => {
                return Err(Error::invalid_argument(
                    "month",
                    format!("must be between 1 and 12, got {m}"),
                ))
            }
            None => None,
        };
        Ok(Self {
            keyword: keyword.into(),
            month,
            limit: limit.max(1) as usize,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Month of the first `MM-DD` in a period string.
pub fn extract_month(period: &str) -> Option<u32> {
    PERIOD_MONTH
        .captures(period)
        .and_then(|caps| caps[1].parse().ok())
}

/// Collect rows of every `| 기간 | 일정 |` table, tracking page anchors.
///
/// A blank line ends a table.
pub fn parse_calendar(markdown: &str) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    let mut page = None;
    let mut in_table = false;

    for line in markdown.lines() {
        let line = line.trim();
        page = advance_page(page, line);

        if line.starts_with(CALENDAR_HEADER) {
            in_table = true;
            continue;
        }
        if !in_table {
            continue;
        }
        if line.starts_with(CALENDAR_SEPARATOR) {
            continue;
        }
        if line.starts_with('|') {
            let mut cells = split_table_row(line).into_iter();
            if let (Some(period), Some(event)) = (cells.next(), cells.next()) {
                events.push(CalendarEvent {
                    period,
                    event,
                    page,
                });
            }
            continue;
        }
        if line.is_empty() {
            in_table = false;
        }
    }
    events
}

/// Select events by month and keyword, up to the query limit.
pub fn query_events(events: &[CalendarEvent], query: &CalendarQuery) -> Vec<CitedEvent> {
    let keyword = query.keyword.trim().to_lowercase();
    events
        .iter()
        .filter(|event| query.month.is_none() || event.month() == query.month)
        .filter(|event| {
            keyword.is_empty()
                || format!("{} {}", event.period, event.event)
                    .to_lowercase()
                    .contains(&keyword)
        })
        .take(query.limit)
        .map(|event| CitedEvent {
            period: event.period.clone(),
            event: event.event.clone(),
            citation: event.citation(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALENDAR: &str = "\
# 학사 일정

## p.1

| 기간 | 일정 |
| --- | --- |
| 2025-03-04 | 1학기 개강 |
| 03-04 ~ 03-10 | 수강신청 정정 |
| 04-21 ~ 04-25 | 중간고사 |

## p.2

| 기간 | 일정 |
| --- | --- |
| 2025-08-11 ~ 2025-08-14 | 2학기 수강신청 |
| 12-22 | 동계 방학 |
";

    #[test]
    fn test_parse_calendar() {
        let events = parse_calendar(CALENDAR);

        assert_eq!(events.len(), 5);
        assert_eq!(events[0].period, "2025-03-04");
        assert_eq!(events[0].page, Some(1));
        assert_eq!(events[3].event, "2학기 수강신청");
        assert_eq!(events[3].page, Some(2));
    }

    #[test]
    fn test_extract_month() {
        assert_eq!(extract_month("03-04 ~ 03-10"), Some(3));
        assert_eq!(extract_month("2025-08-11"), Some(25));
        assert_eq!(extract_month("상시"), None);
    }

    #[test]
    fn test_query_by_keyword() {
        let events = parse_calendar(CALENDAR);
        let query = CalendarQuery::new("수강신청", None, 20).unwrap();
        let found = query_events(&events, &query);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].citation, "(학사 일정.pdf, p.1)");
        assert_eq!(found[1].citation, "(학사 일정.pdf, p.2)");
    }

    #[test]
    fn test_query_by_month() {
        let events = parse_calendar(CALENDAR);
        let query = CalendarQuery::new("", Some(4), 20).unwrap();
        let found = query_events(&events, &query);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].event, "중간고사");
    }

    #[test]
    fn test_limit_zero_behaves_as_one() {
        let events = parse_calendar(CALENDAR);
        let query = CalendarQuery::new("", None, 0).unwrap();
        assert_eq!(query.limit(), 1);
        assert_eq!(query_events(&events, &query).len(), 1);
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            CalendarQuery::new("", Some(13), 20),
            Err(Error::InvalidArgument { name: "month", .. })
        ));
        assert!(CalendarQuery::new("", Some(0), 20).is_err());
    }

    #[test]
    fn test_rows_without_page_marker() {
        let events = parse_calendar("| 기간 | 일정 |\n| --- | --- |\n| 01-02 | 신정 |\n");
        assert_eq!(events[0].citation(), "(학사 일정.pdf, 페이지 확인 필요)");
    }
}
