//! Markdown format implementation using tree-sitter-md.
//!
//! Captures ATX-style headings (# syntax). Setext headings are not part of the outline.

use crate::formats::Format;

/// Tree-sitter query source for ATX-style markdown headings.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }
}
