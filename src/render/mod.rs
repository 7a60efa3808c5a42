//! Rendering module for turning page texts into page-indexed Markdown.

mod cleanup;
mod json;
mod markdown;
mod options;
mod result;

pub use cleanup::{normalize, normalize_block, replace_noise};
pub use json::{to_json, JsonFormat};
pub use markdown::{assemble, assemble_markdown, render_table, MarkdownRenderer, BLANK_PAGE};
pub use options::RenderOptions;
pub use result::AssemblyStats;
