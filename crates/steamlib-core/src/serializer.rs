//! Writes a document back to library file text

use crate::document::{Document, Entry, Section};
use std::fmt::Write as _;

/// Serialize a document in section order
#[must_use]
pub fn serialize(doc: &Document) -> String {
    serialize_with(doc, None)
}

/// Serialize a document, appending `extra` entries to the named section
///
/// The document itself is not modified; the extra entries exist only in the
/// returned text.
#[must_use]
pub fn serialize_with(doc: &Document, extra: Option<(&str, &[Entry])>) -> String {
    let mut output = String::new();

    for section in doc.sections() {
        let appended: &[Entry] = match extra {
            Some((name, entries)) if name == section.name => entries,
            _ => &[],
        };
        write_section(&mut output, section, appended);
    }

    output
}

fn write_section(output: &mut String, section: &Section, appended: &[Entry]) {
    // Writing into a String cannot fail
    let _ = writeln!(output, "\"{}\"", section.name);
    output.push_str("{\n");
    for entry in section.entries.iter().chain(appended) {
        let _ = writeln!(output, "\t\"{}\"\t\"{}\"", entry.key, entry.value);
    }
    output.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_serialize_format() {
        let mut doc = Document::new();
        let idx = doc.open_section("LibraryFolders");
        doc.push_entry(idx, Entry::new("ContentStatsID", "123"));

        assert_eq!(
            serialize(&doc),
            "\"LibraryFolders\"\n{\n\t\"ContentStatsID\"\t\"123\"\n}\n"
        );
    }

    #[test]
    fn test_serialize_empty_section() {
        let mut doc = Document::new();
        doc.open_section("Empty");
        assert_eq!(serialize(&doc), "\"Empty\"\n{\n}\n");
    }

    #[test]
    fn test_serialize_with_does_not_mutate() {
        let mut doc = Document::new();
        let idx = doc.open_section("LibraryFolders");
        doc.push_entry(idx, Entry::new("a", "b"));
        let before = doc.clone();

        let extra = [Entry::new("1", "x")];
        let text = serialize_with(&doc, Some(("LibraryFolders", &extra)));

        assert!(text.contains("\t\"a\"\t\"b\"\n\t\"1\"\t\"x\"\n"));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_serialize_with_unknown_section_ignored() {
        let mut doc = Document::new();
        doc.open_section("A");
        let extra = [Entry::new("1", "x")];
        assert_eq!(serialize_with(&doc, Some(("B", &extra))), serialize(&doc));
    }

    #[test]
    fn test_reparse_of_output_is_stable() {
        let text = "\"A\"\n{\n\t\"k\"\t\t\"v\"\n\t\"k\"\t\t\"w\"\n}\n\"B\"\n{\n\t\"x\"\t\t\"y\"\n}\n";
        let first = serialize(&parse(text).document);
        let second = serialize(&parse(&first).document);
        assert_eq!(first, second);
    }
}
