//! Heading extraction and the exportable outline.
//!
//! Headings are pulled from the parsed document with a tree-sitter query, given stable
//! slug ids (the anchor-id analogue, deduplicated with numeric suffixes), and paired
//! with the display row they landed on after wrapping. The resulting outline is what
//! both the sidebar and the tracker are built from, and it can be serialized as a
//! report on exit.

use crate::formats::Format;
use crate::layout::WrappedDocument;
use crate::tracker::HeadingEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;
use streaming_iterator::StreamingIterator;

#[derive(Clone, Debug)]
/// One document heading with its identity and measured position.
pub struct Heading {
    /// Slug id, unique within the document.
    pub id: String,
    /// Heading text without markup symbols.
    pub title: String,
    /// Nesting depth (1 for top-level).
    pub level: usize,
    /// Zero-based source line of the heading.
    pub source_row: usize,
    /// Display row of the heading in the wrapped document.
    pub position: usize,
}

impl Heading {
    #[must_use]
    /// The tracker-facing view of this heading.
    pub fn entry(&self) -> HeadingEntry {
        HeadingEntry {
            id: self.id.clone(),
            position: self.position,
        }
    }
}

/// Extracts headings from `source` in document order, with positions measured against
/// `doc`.
///
/// Headings whose source line falls outside the wrapped document are skipped rather
/// than reported, so a malformed parse degrades to a shorter outline instead of a
/// failure.
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded, the heading query is invalid, or
/// the document fails to parse.
pub fn extract_headings(
    source: &str,
    doc: &WrappedDocument,
    format: &dyn Format,
) -> io::Result<Vec<Heading>> {
    let language = format.language();
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "parse failed"))?;
    let query = tree_sitter::Query::new(&language, format.heading_query())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut headings = Vec::new();
    let mut seen_slugs: HashMap<String, usize> = HashMap::new();
    let mut cursor = tree_sitter::QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            let text = &source[node.byte_range()];
            let Some((level, title)) = parse_atx_line(text) else {
                continue;
            };
            let source_row = node.start_position().row;
            let Some(position) = doc.row_of(source_row) else {
                continue;
            };
            let id = unique_slug(&title, &mut seen_slugs);
            headings.push(Heading {
                id,
                title,
                level,
                source_row,
                position,
            });
        }
    }
    Ok(headings)
}

/// Splits an ATX heading line into (level, title). Returns `None` for non-heading text.
fn parse_atx_line(text: &str) -> Option<(usize, String)> {
    let line = text.lines().next()?.trim_start();
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let title = line[level..].trim().trim_end_matches('#').trim();
    if title.is_empty() {
        return None;
    }
    Some((level, title.to_string()))
}

/// Slugifies a title, suffixing repeats with `-2`, `-3`, ... to keep ids unique.
fn unique_slug(title: &str, seen: &mut HashMap<String, usize>) -> String {
    let base = slug::slugify(title);
    let count = seen.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{base}-{count}")
    }
}

#[derive(Serialize, Deserialize, Clone)]
/// Serialisable snapshot of the outline and the entry active at exit.
pub struct OutlineReport {
    /// Document the outline was extracted from.
    pub file: String,
    /// Id of the entry highlighted when the report was taken.
    pub active: Option<String>,
    /// Every heading in document order.
    pub headings: Vec<HeadingReport>,
}

#[derive(Serialize, Deserialize, Clone)]
/// One heading row of an [`OutlineReport`].
pub struct HeadingReport {
    /// Slug id of the heading.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Nesting depth.
    pub level: usize,
    /// Display row measured at load.
    pub position: usize,
}

impl OutlineReport {
    #[must_use]
    /// Builds a report over `headings` for `file`, recording the active id.
    pub fn new(file: String, headings: &[Heading], active: Option<&str>) -> Self {
        Self {
            file,
            active: active.map(str::to_string),
            headings: headings
                .iter()
                .map(|h| HeadingReport {
                    id: h.id.clone(),
                    title: h.title.clone(),
                    level: h.level,
                    position: h.position,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
