//! Separation of library folder slots from the rest of a section

use crate::document::{Document, Entry};
use crate::error::{LibraryError, LibraryResult};

/// Move the index entries of `section_name` out of the document
///
/// Entries whose key parses as an integer are removed from the section and
/// their values, unescaped to native paths, are returned in file order.
/// All other entries stay where they were. The document is left untouched
/// if the section does not exist.
pub fn extract_paths(doc: &mut Document, section_name: &str) -> LibraryResult<Vec<String>> {
    let section = doc
        .section_mut(section_name)
        .ok_or_else(|| LibraryError::MissingSection(section_name.to_string()))?;

    let (index, other): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut section.entries)
        .into_iter()
        .partition(Entry::is_index);
    section.entries = other;

    Ok(index.into_iter().map(|e| unescape_path(&e.value)).collect())
}

/// Turn a value as written in the file into a native path (`\\` becomes `\`)
#[must_use]
pub fn unescape_path(value: &str) -> String {
    value.replace("\\\\", "\\")
}

/// Escape a native path for writing (`\` becomes `\\`)
#[must_use]
pub fn escape_path(path: &str) -> String {
    path.replace('\\', "\\\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn library(text: &str) -> Document {
        parse(text).document
    }

    #[test]
    fn test_extract_partitions_entries() {
        let mut doc = library(
            "\"LibraryFolders\"\n{\n\"TimeNextStatsReport\" \"1\"\n\"1\" \"D:\\\\Games\"\n\"ContentStatsID\" \"42\"\n\"2\" \"E:\\\\Steam\"\n}\n",
        );

        let paths = extract_paths(&mut doc, "LibraryFolders").unwrap();
        assert_eq!(paths, vec!["D:\\Games", "E:\\Steam"]);

        let section = doc.section("LibraryFolders").unwrap();
        let keys: Vec<_> = section.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["TimeNextStatsReport", "ContentStatsID"]);
    }

    #[test]
    fn test_extract_keeps_file_order_not_slot_order() {
        let mut doc = library("\"LibraryFolders\"\n{\n\"5\" \"b\"\n\"2\" \"a\"\n}\n");
        let paths = extract_paths(&mut doc, "LibraryFolders").unwrap();
        assert_eq!(paths, vec!["b", "a"]);
    }

    #[test]
    fn test_extract_wide_integer_key() {
        let mut doc = library("\"LibraryFolders\"\n{\n\"1\" \"a\"\n\"99999999999999999999\" \"old\"\n}\n");
        let paths = extract_paths(&mut doc, "LibraryFolders").unwrap();
        assert_eq!(paths, vec!["a", "old"]);
        assert!(doc.section("LibraryFolders").unwrap().entries.is_empty());
    }

    #[test]
    fn test_extract_missing_section() {
        let mut doc = library("\"Other\"\n{\n\"1\" \"x\"\n}\n");
        let before = doc.clone();

        let err = extract_paths(&mut doc, "LibraryFolders").unwrap_err();
        assert!(matches!(err, LibraryError::MissingSection(ref name) if name == "LibraryFolders"));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_extract_only_touches_named_section() {
        let mut doc = library("\"Other\"\n{\n\"1\" \"x\"\n}\n\"LibraryFolders\"\n{\n\"1\" \"y\"\n}\n");
        extract_paths(&mut doc, "LibraryFolders").unwrap();
        assert_eq!(doc.section("Other").unwrap().index_count(), 1);
    }

    #[test]
    fn test_escape_roundtrip() {
        assert_eq!(escape_path("C:\\Games\\Lib"), "C:\\\\Games\\\\Lib");
        assert_eq!(unescape_path("C:\\\\Games\\\\Lib"), "C:\\Games\\Lib");
        assert_eq!(escape_path("/mnt/games"), "/mnt/games");
    }
}
