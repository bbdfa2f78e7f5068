//! Commit pipeline: back up, renumber, serialize, overwrite

use crate::backup::make_backup;
use crate::document::{Document, Entry};
use crate::error::{LibraryError, LibraryResult};
use crate::extract::escape_path;
use crate::serializer::serialize_with;
use crate::LIBRARY_SECTION;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Outcome of a successful commit
#[derive(Debug, Clone, Serialize)]
pub struct CommitReport {
    /// File that was overwritten
    pub file: PathBuf,
    /// Copy of the previous contents
    pub backup_path: PathBuf,
    /// Number of library slots written
    pub slots: usize,
    /// Size of the new file
    pub bytes_written: usize,
}

/// Build index entries `1..=N` for the path list, escaping backslashes
#[must_use]
pub fn index_entries(paths: &[String]) -> Vec<Entry> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| Entry::new((i + 1).to_string(), escape_path(path)))
        .collect()
}

/// Text a commit of `paths` into `section` would write
///
/// Index entries follow the section's other entries. The document is not
/// modified.
#[must_use]
pub fn render(doc: &Document, paths: &[String], section: &str) -> String {
    let entries = index_entries(paths);
    serialize_with(doc, Some((section, &entries)))
}

/// Commit `paths` into the `LibraryFolders` section of `file`
pub fn commit(doc: &Document, paths: &[String], file: &Path) -> LibraryResult<CommitReport> {
    commit_section(doc, paths, file, LIBRARY_SECTION)
}

/// Commit `paths` into the named section of `file`
///
/// Nothing is written when the path list is empty. The existing file is
/// copied to a backup before anything else touches it; if that copy fails
/// the file is left alone. The new contents are fully rendered in memory and
/// then swapped in through a temporary file in the same directory.
pub fn commit_section(
    doc: &Document,
    paths: &[String],
    file: &Path,
    section: &str,
) -> LibraryResult<CommitReport> {
    if paths.is_empty() {
        return Err(LibraryError::EmptyPathList);
    }
    if doc.section(section).is_none() {
        return Err(LibraryError::MissingSection(section.to_string()));
    }

    let backup_path = make_backup(file).map_err(|e| LibraryError::BackupFailed {
        path: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let contents = render(doc, paths, section);
    write_replace(file, &contents)?;

    info!(
        file = %file.display(),
        slots = paths.len(),
        "library folders committed"
    );

    Ok(CommitReport {
        file: file.to_path_buf(),
        backup_path,
        slots: paths.len(),
        bytes_written: contents.len(),
    })
}

/// Replace `path` with `contents` without ever leaving a partial file behind
///
/// Symlinks are followed, so the file they point at is the one replaced.
fn write_replace(path: &Path, contents: &str) -> LibraryResult<()> {
    let target = fs::canonicalize(path).map_err(|e| LibraryError::io(path, &e))?;
    let path = target.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| LibraryError::io(dir, &e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| LibraryError::io(tmp.path(), &e))?;

    // Keep the original file's permissions rather than the temp file's
    if let Ok(meta) = fs::metadata(path) {
        if let Err(e) = fs::set_permissions(tmp.path(), meta.permissions()) {
            warn!(
                file = %path.display(),
                error = %e,
                "could not copy permissions; rewritten file keeps default permissions"
            );
        }
    }

    tmp.persist(path)
        .map_err(|e| LibraryError::io(path, &e.error))?;
    Ok(())
}
