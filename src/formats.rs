//! Format trait and implementations for different document types.
//!
//! The sidebar only needs heading structure, so a format is a tree-sitter language plus
//! a query that captures heading nodes. Other outline-bearing formats (org-mode,
//! restructuredtext) would slot in beside markdown.

pub mod markdown;

/// A document format the outline extractor can read headings from.
pub trait Format {
    /// Tree-sitter grammar for the format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node.
    fn heading_query(&self) -> &str;
}
