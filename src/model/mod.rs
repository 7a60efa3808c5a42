//! Document model types.
//!
//! Pages keep the extractor's text alongside what was recovered from it:
//! detected table blocks and normalized prose.

mod document;
mod page;
mod table;

pub use document::{AssembledDocument, Metadata};
pub use page::Page;
pub(crate) use table::has_digit;
pub use table::{synthesized_header, Table, TableBlock};
