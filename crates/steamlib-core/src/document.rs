//! In-memory model of a library file
//!
//! The model is deliberately two-level: named sections holding flat,
//! ordered key/value entries. Brace nesting below that is not represented.

use serde::Serialize;

/// One key/value pair within a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Slot number for display; `None` for non-integer keys and for integers
    /// too wide for `i64`
    #[must_use]
    pub fn slot(&self) -> Option<i64> {
        if self.is_index() {
            self.key.trim().parse().ok()
        } else {
            None
        }
    }

    /// Check if this entry is a library folder slot
    ///
    /// Any integer key counts, however many digits it has.
    #[must_use]
    pub fn is_index(&self) -> bool {
        let key = self.key.trim();
        let digits = key.strip_prefix(['+', '-']).unwrap_or(key);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

/// A named group of entries. Duplicate keys are kept in position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Section {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// First value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Count of index entries currently held
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_index()).count()
    }
}

/// Ordered collection of sections, looked up by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections in first-seen order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Return the position of the named section, creating it at the end if absent
    pub fn open_section(&mut self, name: &str) -> usize {
        if let Some(pos) = self.sections.iter().position(|s| s.name == name) {
            pos
        } else {
            self.sections.push(Section::new(name));
            self.sections.len() - 1
        }
    }

    /// Append an entry to the section at `index` (as returned by [`Self::open_section`])
    pub fn push_entry(&mut self, index: usize, entry: Entry) {
        if let Some(section) = self.sections.get_mut(index) {
            section.push(entry);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
