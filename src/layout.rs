//! Rendered-row measurement for the content pane.
//!
//! Heading positions are rows in the wrapped document, not source line numbers, so the
//! source is wrapped once at startup and each source line's display row is the running
//! total of the wrapped heights of every line before it. The measurement is never
//! repeated: if the wrap width later disagrees with the terminal, positions go stale,
//! which is accepted behavior.

/// A document wrapped for display, with source-line to display-row mapping.
pub struct WrappedDocument {
    /// Display rows in render order.
    pub rows: Vec<String>,
    /// Display row at which each source line starts.
    pub row_of_line: Vec<usize>,
}

impl WrappedDocument {
    #[must_use]
    /// Wraps `source` to `width` columns and records where every source line landed.
    pub fn build(source: &str, width: usize) -> Self {
        let mut rows = Vec::new();
        let mut row_of_line = Vec::new();
        for line in source.lines() {
            row_of_line.push(rows.len());
            rows.extend(wrap_line(line, width));
        }
        Self { rows, row_of_line }
    }

    #[must_use]
    /// Display row of the given source line, if the line exists.
    pub fn row_of(&self, source_line: usize) -> Option<usize> {
        self.row_of_line.get(source_line).copied()
    }

    #[must_use]
    /// Total display rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    /// Largest scroll offset that still fills a pane of `pane_height` rows.
    pub fn max_scroll(&self, pane_height: usize) -> usize {
        self.rows.len().saturating_sub(pane_height)
    }
}

/// Greedy word wrap of one source line into display rows.
///
/// Words longer than the width are split hard; an empty line still occupies one row so
/// vertical rhythm survives the wrap.
#[must_use]
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if line.trim().is_empty() {
        return vec![String::new()];
    }
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if word_len > width {
            for chunk in hard_split(word, width, &mut current, &mut current_len) {
                rows.push(chunk);
            }
            continue;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// Splits an over-long word into full-width chunks, leaving the tail in `current`.
fn hard_split(
    word: &str,
    width: usize,
    current: &mut String,
    current_len: &mut usize,
) -> Vec<String> {
    let mut rows = Vec::new();
    if *current_len > 0 {
        rows.push(std::mem::take(current));
        *current_len = 0;
    }
    let chars: Vec<char> = word.chars().collect();
    let mut start = 0;
    while chars.len() - start > width {
        rows.push(chars[start..start + width].iter().collect());
        start += width;
    }
    *current = chars[start..].iter().collect();
    *current_len = chars.len() - start;
    rows
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
