//! Search over the converted corpus.
//!
//! [`EvidenceIndex`] finds lines in assembled Markdown that contain query
//! terms and cites the page each line came from. [`PageSearch`] runs a regex
//! or literal over raw page texts.

pub mod anchor;
pub mod citation;
mod index;
mod pattern;
mod terms;

pub use anchor::{is_page_marker, parse_page_marker, scan_lines, AnchoredLine};
pub use citation::citation_hint;
pub use index::{search_paths, EvidenceHit, EvidenceIndex, SNIPPET_CHARS};
pub use pattern::{PageMatch, PageSearch, PatternOptions, SearchLimits};
pub use terms::{build_terms, STOP_TERMS};
