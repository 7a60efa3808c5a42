//! Question categories and the corpus documents each one searches.

mod category;
mod corpus;

pub use category::{classify, Category, Classification};
pub use corpus::{
    CorpusLayout, SourceListing, CALENDAR_DOCUMENT, CREDIT_TABLE_DOCUMENT, SOURCE_PDFS,
};
