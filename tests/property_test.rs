//! Property tests for text cleanup, page assembly and term extraction.

use proptest::prelude::*;

use pagecite::render::{assemble, normalize};
use pagecite::search::{parse_page_marker, scan_lines};
use pagecite::{build_terms, split_pages, MarkdownRenderer, RenderOptions};

fn page_text() -> impl Strategy<Value = String> {
    "[a-z0-9가-힣 $#*!%\n]{0,60}"
}

proptest! {
    #[test]
    fn normalize_is_idempotent(line in "[a-z0-9가-힣 \t$#*!%&]{0,40}") {
        let once = normalize(&line);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn assembled_page_count_matches_stream(pages in prop::collection::vec(page_text(), 1..8)) {
        let stream = pages.join("\u{000C}");
        let split = split_pages(&stream);
        let doc = assemble("doc", "doc.pdf", &split, &RenderOptions::new().sequential());

        prop_assert_eq!(doc.page_count() as usize, split.len());
        prop_assert_eq!(doc.metadata.page_count as usize, split.len());
        for (i, page) in doc.pages.iter().enumerate() {
            prop_assert_eq!(page.number as usize, i + 1);
        }
    }

    #[test]
    fn rendered_anchors_are_ordered(pages in prop::collection::vec(page_text(), 1..8)) {
        let doc = assemble("doc", "doc.pdf", &pages, &RenderOptions::new());
        let markdown = MarkdownRenderer::new().render(&doc);

        let anchors: Vec<u32> = scan_lines(&markdown).filter_map(|line| line.page).collect();
        prop_assert!(anchors.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(anchors.last().copied(), Some(pages.len() as u32));

        let markers: Vec<u32> = markdown.lines().filter_map(parse_page_marker).collect();
        let expected: Vec<u32> = (1..=pages.len() as u32).collect();
        prop_assert_eq!(markers, expected);
        prop_assert!(markdown.ends_with('\n'));
        prop_assert!(!markdown.ends_with("\n\n"));
    }

    #[test]
    fn terms_are_unique_lowercase(query in "[A-Za-z가-힣 ?]{0,40}") {
        let terms = build_terms(&query);
        for (i, term) in terms.iter().enumerate() {
            prop_assert!(term.chars().count() >= 2);
            prop_assert_eq!(term.to_lowercase(), term.clone());
            prop_assert!(!terms[..i].contains(term));
        }
    }
}
