//! Line-based parser for library files
//!
//! Recognises two shapes of line and nothing else:
//!
//! - a section header: a single quoted token, e.g. `"LibraryFolders"`
//! - an entry: two quoted tokens separated by optional whitespace,
//!   e.g. `"1"		"D:\\SteamLibrary"`
//!
//! Brace depth is not tracked. Values are taken literally between the outer
//! quotes; no unescaping happens here. Lines of any other shape are dropped
//! and reported in [`ParsedDocument::skipped`].

use crate::document::{Document, Entry};
use serde::Serialize;
use tracing::debug;

/// A line the parser did not recognise and dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    /// Trimmed line text
    pub text: String,
}

/// Parse result: the document plus the lines that were dropped
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub document: Document,
    pub skipped: Vec<SkippedLine>,
}

/// Parse library file text into a document
///
/// Never fails. Blank lines and brace lines are structural and are not
/// reported; every other unrecognised line is.
#[must_use]
pub fn parse(text: &str) -> ParsedDocument {
    let mut document = Document::new();
    let mut skipped = Vec::new();
    let mut current: Option<usize> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();

        if let Some(name) = match_header(line) {
            current = Some(document.open_section(name));
            continue;
        }

        if let Some((key, value)) = match_entry(line) {
            if let Some(section) = current {
                document.push_entry(section, Entry::new(key, value));
                continue;
            }
        }

        if !is_structural(line) {
            debug!(line = index + 1, text = line, "dropping unrecognised line");
            skipped.push(SkippedLine {
                line: index + 1,
                text: line.to_string(),
            });
        }
    }

    ParsedDocument { document, skipped }
}

/// `"name"` with no interior quote
fn match_header(line: &str) -> Option<&str> {
    let inner = strip_outer_quotes(line)?;
    if inner.contains('"') {
        return None;
    }
    Some(inner)
}

/// `"key" "value"`, splitting at the last quote-whitespace-quote run so the
/// key is as long as possible
fn match_entry(line: &str) -> Option<(&str, &str)> {
    let body = strip_outer_quotes(line)?;

    for (i, _) in body.match_indices('"').rev() {
        let rest = &body[i + 1..];
        let after = rest.trim_start();
        if after.starts_with('"') {
            let value_start = i + 1 + (rest.len() - after.len()) + 1;
            return Some((&body[..i], &body[value_start..]));
        }
    }

    None
}

fn strip_outer_quotes(line: &str) -> Option<&str> {
    if line.len() < 2 {
        return None;
    }
    line.strip_prefix('"')?.strip_suffix('"')
}

fn is_structural(line: &str) -> bool {
    line.is_empty() || line == "{" || line == "}"
}
