//! Editing session over one library file
//!
//! A session owns the parsed document and the path list checked out of it.
//! The document never holds index entries while the session is open; they
//! are rebuilt from the path list on every commit.

use crate::commit::{commit_section, render, CommitReport};
use crate::diff::line_diff;
use crate::document::Document;
use crate::error::{LibraryError, LibraryResult};
use crate::extract::extract_paths;
use crate::parser::{parse, ParsedDocument, SkippedLine};
use crate::LIBRARY_SECTION;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Options for opening a session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Section holding the library slots
    pub section: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            section: LIBRARY_SECTION.to_string(),
        }
    }
}

/// Loaded library file plus the user-editable path list
#[derive(Debug, Clone)]
pub struct LibrarySession {
    file: PathBuf,
    section: String,
    document: Document,
    paths: Vec<String>,
    skipped: Vec<SkippedLine>,
}

impl LibrarySession {
    /// Load and parse `file` with default options
    pub fn load(file: impl Into<PathBuf>) -> LibraryResult<Self> {
        Self::load_with(file, SessionOptions::default())
    }

    /// Load and parse `file`
    pub fn load_with(file: impl Into<PathBuf>, options: SessionOptions) -> LibraryResult<Self> {
        let file = file.into();
        let text = fs::read_to_string(&file).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LibraryError::LibraryFileNotFound(file.clone()),
            ErrorKind::InvalidData => LibraryError::NotUtf8(file.clone()),
            _ => LibraryError::io(&file, &e),
        })?;
        Self::from_text(file, &text, options)
    }

    /// Build a session from text already in memory; `file` is where commits go
    pub fn from_text(
        file: impl Into<PathBuf>,
        text: &str,
        options: SessionOptions,
    ) -> LibraryResult<Self> {
        let file = file.into();
        let ParsedDocument {
            mut document,
            skipped,
        } = parse(text);

        if !skipped.is_empty() {
            warn!(
                file = %file.display(),
                count = skipped.len(),
                "unrecognised lines will not be written back"
            );
        }

        let paths = extract_paths(&mut document, &options.section)?;
        debug!(file = %file.display(), paths = paths.len(), "library loaded");

        Ok(Self {
            file,
            section: options.section,
            document,
            paths,
            skipped,
        })
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    #[must_use]
    pub fn section_name(&self) -> &str {
        &self.section
    }

    /// Document without its index entries
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Lines dropped while parsing
    #[must_use]
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Current path list
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Replace the whole path list
    pub fn set_paths(&mut self, paths: Vec<String>) {
        self.paths = paths;
    }

    /// Append a path; exact duplicates are rejected
    pub fn add_path(&mut self, path: impl Into<String>) -> LibraryResult<()> {
        let path = path.into();
        if self.paths.contains(&path) {
            return Err(LibraryError::DuplicatePath(path));
        }
        self.paths.push(path);
        Ok(())
    }

    /// Remove the path at `index` (0-based) and return it
    pub fn remove_path(&mut self, index: usize) -> LibraryResult<String> {
        if index >= self.paths.len() {
            return Err(LibraryError::NoSuchPath(format!("slot {}", index + 1)));
        }
        Ok(self.paths.remove(index))
    }

    /// Remove the first path equal to `path` and return its former index
    pub fn remove_path_value(&mut self, path: &str) -> LibraryResult<usize> {
        let index = self
            .paths
            .iter()
            .position(|p| p == path)
            .ok_or_else(|| LibraryError::NoSuchPath(path.to_string()))?;
        self.paths.remove(index);
        Ok(index)
    }

    /// Text the next commit would write
    #[must_use]
    pub fn preview(&self) -> String {
        render(&self.document, &self.paths, &self.section)
    }

    /// Line diff between the file on disk and [`Self::preview`]
    pub fn diff(&self) -> LibraryResult<String> {
        let current = fs::read_to_string(&self.file).map_err(|e| LibraryError::io(&self.file, &e))?;
        Ok(line_diff(&current, &self.preview()))
    }

    /// Back up the file and write the current path list into it
    ///
    /// May be called repeatedly; each call writes a fresh backup and
    /// renumbers the slots from 1.
    pub fn commit(&self) -> LibraryResult<CommitReport> {
        commit_section(&self.document, &self.paths, &self.file, &self.section)
    }
}
