//! On-disk layout of the document corpus.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Category;

/// Source PDFs the corpus is built from.
pub const SOURCE_PDFS: [&str; 5] = [
    "학칙.pdf",
    "학점 이수 체계.pdf",
    "교양 필수.pdf",
    "교양 선택.pdf",
    "학사 일정.pdf",
];

/// Normalized credit requirement table.
pub const CREDIT_TABLE_DOCUMENT: &str = "학점 이수 체계.md";

/// Normalized academic calendar.
pub const CALENDAR_DOCUMENT: &str = "학사 일정.md";

/// Directory layout of a corpus.
///
/// ```text
/// root/
///   docs/                     source PDFs
///   knowledge/normalized-md/  curated Markdown
///   knowledge/raw-md/         converter output
///   references/               regulation indexes and source map
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    pub root: PathBuf,
    pub docs_dir: PathBuf,
    pub normalized_dir: PathBuf,
    pub raw_dir: PathBuf,
    pub references_dir: PathBuf,
}

/// Documents of a corpus grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceListing {
    pub docs: Vec<PathBuf>,
    pub normalized_md: Vec<PathBuf>,
    pub raw_md: Vec<PathBuf>,
    pub references: Vec<PathBuf>,
}

impl CorpusLayout {
    /// Create the standard layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            docs_dir: root.join("docs"),
            normalized_dir: root.join("knowledge").join("normalized-md"),
            raw_dir: root.join("knowledge").join("raw-md"),
            references_dir: root.join("references"),
            root,
        }
    }

    /// Path of the normalized credit requirement table.
    pub fn credit_table_path(&self) -> PathBuf {
        self.normalized_dir.join(CREDIT_TABLE_DOCUMENT)
    }

    /// Path of the normalized academic calendar.
    pub fn calendar_path(&self) -> PathBuf {
        self.normalized_dir.join(CALENDAR_DOCUMENT)
    }

    /// Documents to search for a category, in priority order.
    ///
    /// Only files that exist are returned.
    pub fn category_paths(&self, category: Category) -> Vec<PathBuf> {
        let normalized = |name: &str| self.normalized_dir.join(name);
        let raw = |name: &str| self.raw_dir.join(name);
        let reference = |name: &str| self.references_dir.join(name);

        let candidates = match category {
            Category::RegulationQa => vec![
                normalized("학칙.md"),
                reference("law-topic-index.md"),
                reference("law-articles.md"),
                reference("law-numeric-rules.md"),
                raw("학칙.raw.md"),
            ],
            Category::Graduation => vec![
                normalized("학점 이수 체계.md"),
                normalized("교양 필수.md"),
                normalized("교양 선택.md"),
            ],
            Category::Retake => vec![
                normalized("학칙.md"),
                normalized("교양 필수.md"),
                raw("학칙.raw.md"),
            ],
            Category::Scholarship => vec![
                reference("source-map.md"),
                reference("law-numeric-rules.md"),
                normalized("학칙.md"),
            ],
            Category::Registration => vec![normalized("학사 일정.md"), normalized("학칙.md")],
        };

        candidates.into_iter().filter(|path| path.exists()).collect()
    }

    /// List source PDFs and the Markdown files of each directory.
    pub fn list_sources(&self) -> SourceListing {
        SourceListing {
            docs: SOURCE_PDFS
                .iter()
                .map(|name| self.docs_dir.join(name))
                .collect(),
            normalized_md: markdown_files(&self.normalized_dir),
            raw_md: markdown_files(&self.raw_dir),
            references: markdown_files(&self.references_dir),
        }
    }
}

impl Default for CorpusLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    let pattern = format!("{}/*.md", glob::Pattern::escape(&dir.to_string_lossy()));
    let Ok(entries) = glob::glob(&pattern) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn corpus() -> (tempfile::TempDir, CorpusLayout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = CorpusLayout::new(dir.path());
        fs::create_dir_all(&layout.normalized_dir).unwrap();
        fs::create_dir_all(&layout.raw_dir).unwrap();
        fs::create_dir_all(&layout.references_dir).unwrap();
        (dir, layout)
    }

    #[test]
    fn test_layout_paths() {
        let layout = CorpusLayout::new("/srv/corpus");
        assert_eq!(
            layout.credit_table_path(),
            PathBuf::from("/srv/corpus/knowledge/normalized-md/학점 이수 체계.md")
        );
        assert_eq!(layout.docs_dir, PathBuf::from("/srv/corpus/docs"));
    }

    #[test]
    fn test_category_paths_filtered_to_existing() {
        let (_dir, layout) = corpus();
        fs::write(layout.normalized_dir.join("학칙.md"), "").unwrap();
        fs::write(layout.raw_dir.join("학칙.raw.md"), "").unwrap();

        let paths = layout.category_paths(Category::RegulationQa);
        assert_eq!(
            paths,
            vec![
                layout.normalized_dir.join("학칙.md"),
                layout.raw_dir.join("학칙.raw.md"),
            ]
        );
        assert!(layout.category_paths(Category::Graduation).is_empty());
    }

    #[test]
    fn test_list_sources() {
        let (_dir, layout) = corpus();
        fs::write(layout.normalized_dir.join("학칙.md"), "").unwrap();
        fs::write(layout.normalized_dir.join("교양 필수.md"), "").unwrap();
        fs::write(layout.normalized_dir.join("notes.txt"), "").unwrap();
        fs::write(layout.references_dir.join("source-map.md"), "").unwrap();

        let listing = layout.list_sources();
        assert_eq!(listing.docs.len(), 5);
        assert_eq!(listing.normalized_md.len(), 2);
        assert!(listing.normalized_md.windows(2).all(|w| w[0] < w[1]));
        assert!(listing.raw_md.is_empty());
        assert_eq!(listing.references.len(), 1);
    }
}
