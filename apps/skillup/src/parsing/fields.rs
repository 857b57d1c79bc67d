//! Labeled-field extraction shared by the job and project parsers.
//!
//! A field is the text after `<label>:` (or the bold form `<label>:**`) up to
//! the next known label or the end of the chunk. Stray markdown emphasis around
//! the captured text is dropped.

use regex::Regex;

pub const ELLIPSIS: &str = "...";

/// Cuts `value` to its first `cap` characters plus `"..."` when it is longer
/// than `cap`; shorter values are returned unchanged.
pub fn truncate(value: &str, cap: usize) -> String {
    match value.char_indices().nth(cap) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &value[..byte_idx]),
        None => value.to_string(),
    }
}

/// Splits `text` on `pattern` and drops chunks that are blank once trimmed.
pub fn split_chunks<'t>(pattern: &Regex, text: &'t str) -> Vec<&'t str> {
    pattern
        .split(text)
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}

/// Drops surrounding whitespace and emphasis markers.
pub fn clean(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '*')
}

/// Removes every literal `**` marker.
pub fn strip_bold(value: &str) -> String {
    value.replace("**", "")
}

/// A fixed set of labels that delimit each other inside a chunk of prose.
#[derive(Debug, Clone, Copy)]
pub struct FieldSet {
    labels: &'static [&'static str],
}

impl FieldSet {
    pub const fn new(labels: &'static [&'static str]) -> Self {
        Self { labels }
    }

    /// Content of `label` in `chunk`, or `None` when the label is absent or
    /// carries no text.
    pub fn extract<'c>(&self, chunk: &'c str, label: &str) -> Option<&'c str> {
        let start = content_start(chunk, label)?;
        let rest = &chunk[start..];
        let end = self.next_label(rest).unwrap_or(rest.len());
        let value = clean(&rest[..end]);
        (!value.is_empty()).then_some(value)
    }

    /// Like [`FieldSet::extract`], substituting `placeholder` when missing.
    pub fn extract_or(&self, chunk: &str, label: &str, placeholder: &str) -> String {
        self.extract(chunk, label).unwrap_or(placeholder).to_string()
    }

    /// Byte offset of the earliest `<label>:` of this set in `text`.
    pub fn next_label(&self, text: &str) -> Option<usize> {
        self.labels
            .iter()
            .filter_map(|label| find_marker(text, label, ":"))
            .map(|(idx, _)| idx)
            .min()
    }

    /// Text before the first label of this set.
    pub fn before_first_label<'t>(&self, text: &'t str) -> &'t str {
        &text[..self.next_label(text).unwrap_or(text.len())]
    }
}

/// Byte offset just past the marker of `label`, preferring the bold form.
fn content_start(chunk: &str, label: &str) -> Option<usize> {
    find_marker(chunk, label, ":**")
        .or_else(|| find_marker(chunk, label, ":"))
        .map(|(_, end)| end)
}

fn find_marker(text: &str, label: &str, suffix: &str) -> Option<(usize, usize)> {
    let marker = format!("{label}{suffix}");
    text.find(&marker).map(|idx| (idx, idx + marker.len()))
}
