//! Rule tables and the evaluations built on them.
//!
//! Rule documents are Markdown pipe tables. Rows are matched by partial
//! keys and evaluated against a student's numbers; a missing or unmatched
//! rule is reported as [`Judgement::Indeterminate`], never as an error.

mod cache;
pub mod calendar;
mod evaluate;
mod matcher;
pub mod scholarship;
mod table;

pub use cache::RuleCache;
pub use calendar::{parse_calendar, query_events, CalendarEvent, CalendarQuery, CitedEvent};
pub use evaluate::{
    evaluate, required_credits, Credits, EarnedCredits, Evaluation, Judgement, LabeledCredits,
    MajorType,
};
pub use matcher::{best_row, score_row, RuleMatch};
pub use scholarship::{check_threshold, ThresholdCheck, ThresholdGaps, ThresholdInput};
pub use table::{
    load_rows, load_rows_with_header, parse_credit, split_table_row, RuleRow,
    CREDIT_TABLE_COLUMNS,
};
