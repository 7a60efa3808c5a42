//! Regex or literal search over raw page texts.
//!
//! Works on the extractor's page texts directly, before any Markdown is
//! assembled, and reports the page and line of each hit.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a page search query is interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternOptions {
    /// Treat the query as a regular expression instead of a literal
    pub regex: bool,
    /// Match case exactly
    pub case_sensitive: bool,
}

impl PatternOptions {
    /// Create options for a case-insensitive literal search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret the query as a regular expression.
    pub fn with_regex(mut self, regex: bool) -> Self {
        self.regex = regex;
        self
    }

    /// Enable or disable case-sensitive matching.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

/// Validated limits for a page search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    max_hits: usize,
    context: usize,
}

impl SearchLimits {
    /// Validate caller-supplied limits.
    ///
    /// `max_hits` must be positive and `context` must not be negative.
    pub fn new(max_hits: i64, context: i64) -> Result<Self> {
        if max_hits <= 0 {
            return Err(Error::invalid_argument("max_hits", "must be > 0"));
        }
        if context < 0 {
            return Err(Error::invalid_argument("context", "must be >= 0"));
        }
        Ok(Self {
            max_hits: max_hits as usize,
            context: context as usize,
        })
    }

    /// Maximum number of hits across all pages.
    pub fn max_hits(&self) -> usize {
        self.max_hits
    }

    /// Characters of context on each side of a match.
    pub fn context(&self) -> usize {
        self.context
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_hits: 20,
            context: 50,
        }
    }
}

/// One pattern match on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMatch {
    /// 1-based page number
    pub page: usize,
    /// 1-based line number within the page
    pub line: usize,
    /// Matched text
    #[serde(rename = "match")]
    pub matched: String,
    /// Match with surrounding context, trimmed
    pub snippet: String,
}

/// A compiled page search.
#[derive(Debug, Clone)]
pub struct PageSearch {
    pattern: Regex,
}

impl PageSearch {
    /// Compile a query. Invalid regular expressions are rejected.
    pub fn new(query: &str, options: PatternOptions) -> Result<Self> {
        let source = if options.regex {
            query.to_string()
        } else {
            regex::escape(query)
        };
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(!options.case_sensitive)
            .build()?;
        Ok(Self { pattern })
    }

    /// Find the first match on each line, stopping at the hit limit.
    pub fn search(&self, pages: &[String], limits: SearchLimits) -> Vec<PageMatch> {
        let mut hits = Vec::new();
        for (page_idx, page) in pages.iter().enumerate() {
            for (line_idx, line) in page.lines().enumerate() {
                let Some(found) = self.pattern.find(line) else {
                    continue;
                };
                hits.push(PageMatch {
                    page: page_idx + 1,
                    line: line_idx + 1,
                    matched: found.as_str().to_string(),
                    snippet: snippet(line, found.start(), found.end(), limits.context),
                });
                if hits.len() >= limits.max_hits {
                    return hits;
                }
            }
        }
        hits
    }
}

fn snippet(line: &str, start: usize, end: usize, context: usize) -> String {
    let before: Vec<char> = line[..start].chars().collect();
    let before: String = before[before.len().saturating_sub(context)..].iter().collect();
    let after: String = line[end..].chars().take(context).collect();
    format!("{}{}{}", before, &line[start..end], after)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_literal_case_insensitive() {
        let search = PageSearch::new("GPA", PatternOptions::new()).unwrap();
        let hits = search.search(
            &pages(&["intro\nminimum gpa 3.0", "GPA again"]),
            SearchLimits::default(),
        );

        assert_eq!(hits.len(), 2);
        assert_eq!((hits[0].page, hits[0].line), (1, 2));
        assert_eq!(hits[0].matched, "gpa");
        assert_eq!(hits[1].page, 2);
    }

    #[test]
    fn test_literal_escapes_metacharacters() {
        let search = PageSearch::new("p.1", PatternOptions::new()).unwrap();
        let hits = search.search(&pages(&["p11", "see p.1"]), SearchLimits::default());

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].page, 2);
    }

    #[test]
    fn test_regex_case_sensitive() {
        let options = PatternOptions::new().with_regex(true).with_case_sensitive(true);
        let search = PageSearch::new(r"제\d+조", options).unwrap();
        let hits = search.search(&pages(&["제12조 휴학 제13조"]), SearchLimits::default());

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].matched, "제12조");
    }

    #[test]
    fn test_snippet_context_in_chars() {
        let search = PageSearch::new("휴학", PatternOptions::new()).unwrap();
        let limits = SearchLimits::new(5, 2).unwrap();
        let hits = search.search(&pages(&["  가나다라 휴학 마바사아  "]), limits);

        assert_eq!(hits[0].snippet, "라 휴학 마");
    }

    #[test]
    fn test_stops_at_max_hits() {
        let search = PageSearch::new("a", PatternOptions::new()).unwrap();
        let limits = SearchLimits::new(2, 0).unwrap();
        let hits = search.search(&pages(&["a\na", "a"]), limits);

        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|hit| hit.page == 1));
    }

    #[test]
    fn test_invalid_regex() {
        let options = PatternOptions::new().with_regex(true);
        assert!(matches!(
            PageSearch::new("([", options),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_limits_validation() {
        assert!(matches!(
            SearchLimits::new(0, 10),
            Err(Error::InvalidArgument { name: "max_hits", .. })
        ));
        assert!(matches!(
            SearchLimits::new(5, -1),
            Err(Error::InvalidArgument { name: "context", .. })
        ));
        assert_eq!(SearchLimits::new(1, 0).unwrap().context(), 0);
    }
}
