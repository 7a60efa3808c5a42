//! Term search over page-anchored Markdown documents.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::anchor::scan_lines;
use super::citation::citation_hint;

/// Maximum snippet length in characters.
pub const SNIPPET_CHARS: usize = 240;

/// A line that matched at least one search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceHit {
    /// Document the line came from
    pub file: String,
    /// 1-based line number in the document
    pub line: usize,
    /// Page anchor of the line
    pub page: Option<u32>,
    /// Trimmed line text, at most [`SNIPPET_CHARS`] characters
    pub snippet: String,
    /// Terms found in the line, in query order
    pub matched_terms: Vec<String>,
    /// Number of matched terms
    pub score: usize,
    /// Citation for the source PDF page
    pub citation_hint: String,
}

#[derive(Debug, Clone)]
struct IndexedDocument {
    path: PathBuf,
    text: String,
}

/// A set of loaded documents to search.
#[derive(Debug, Clone, Default)]
pub struct EvidenceIndex {
    documents: Vec<IndexedDocument>,
}

impl EvidenceIndex {
    /// Load documents from disk. Missing files are skipped.
    pub fn open<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            match fs::read_to_string(path) {
                Ok(text) => documents.push(IndexedDocument {
                    path: path.to_path_buf(),
                    text,
                }),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::warn!("Skipping missing document: {}", path.display());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Self { documents })
    }

    /// Build an index from in-memory documents.
    pub fn from_documents<I, P, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: Into<String>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(path, text)| IndexedDocument {
                    path: path.into(),
                    text: text.into(),
                })
                .collect(),
        }
    }

    /// Number of loaded documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if no documents are loaded.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Search all documents for lines containing any of `terms`.
    ///
    /// Each document contributes at most `max_hits` hits in line order. The
    /// combined list is stably sorted by score, highest first, and cut to
    /// `max_hits`, so equal scores keep document order then line order.
    pub fn search(&self, terms: &[String], max_hits: usize) -> Vec<EvidenceHit> {
        if terms.is_empty() || max_hits == 0 {
            return Vec::new();
        }

        let mut hits: Vec<EvidenceHit> = self
            .documents
            .iter()
            .flat_map(|doc| search_document(doc, terms, max_hits))
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(max_hits);
        hits
    }
}

fn search_document(doc: &IndexedDocument, terms: &[String], max_hits: usize) -> Vec<EvidenceHit> {
    let mut hits = Vec::new();
    for line in scan_lines(&doc.text) {
        let candidate = line.text.trim();
        if candidate.is_empty() {
            continue;
        }

        let lowered = candidate.to_lowercase();
        let matched_terms: Vec<String> = terms
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .cloned()
            .collect();
        if matched_terms.is_empty() {
            continue;
        }

        hits.push(EvidenceHit {
            file: doc.path.display().to_string(),
            line: line.number,
            page: line.page,
            snippet: candidate.chars().take(SNIPPET_CHARS).collect(),
            score: matched_terms.len(),
            matched_terms,
            citation_hint: citation_hint(&doc.path, line.page),
        });
        if hits.len() >= max_hits {
            break;
        }
    }
    hits
}

/// Load `paths` and search them in one call.
pub fn search_paths<P: AsRef<Path>>(
    paths: &[P],
    terms: &[String],
    max_hits: usize,
) -> Result<Vec<EvidenceHit>> {
    Ok(EvidenceIndex::open(paths)?.search(terms, max_hits))
}
