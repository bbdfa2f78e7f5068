//! Backup copies made before the library file is overwritten
//!
//! Backups sit next to the original. The first is `<file>.old`; when that
//! name is taken, `.1` is appended to it, then `.2` to that, and so on, so
//! the names form a chain: `file.old`, `file.old.1`, `file.old.1.2`, ...
//! Existing backups on disk follow this scheme, so it must not change.

use crate::error::{LibraryError, LibraryResult};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Pick the first unused backup name for `path`
#[must_use]
pub fn backup_candidate(path: &Path) -> PathBuf {
    let mut chain = BackupChain::new(path);
    loop {
        let candidate = chain.next_name();
        if !entry_exists(&candidate) {
            return candidate;
        }
    }
}

/// Copy `path` to a fresh backup name and return that name
pub fn make_backup(path: &Path) -> LibraryResult<PathBuf> {
    let backup_path = backup_candidate(path);
    fs::copy(path, &backup_path).map_err(|e| LibraryError::io(path, &e))?;
    info!(source = %path.display(), backup = %backup_path.display(), "backup created");
    Ok(backup_path)
}

/// Existing backups of `path`, oldest first
///
/// Follows the naming chain and stops at the first missing link.
#[must_use]
pub fn list_backups(path: &Path) -> Vec<PathBuf> {
    let mut chain = BackupChain::new(path);
    let mut found = Vec::new();
    loop {
        let candidate = chain.next_name();
        if !entry_exists(&candidate) {
            return found;
        }
        found.push(candidate);
    }
}

/// Generator for successive names in the backup chain
struct BackupChain {
    current: OsString,
    counter: u32,
    started: bool,
}

impl BackupChain {
    fn new(path: &Path) -> Self {
        let mut current = path.as_os_str().to_os_string();
        current.push(".old");
        Self {
            current,
            counter: 1,
            started: false,
        }
    }

    fn next_name(&mut self) -> PathBuf {
        if self.started {
            self.current.push(format!(".{}", self.counter));
            self.counter += 1;
        } else {
            self.started = true;
        }
        PathBuf::from(&self.current)
    }
}

/// Any filesystem entry, including a dangling symlink, occupies the name
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("libraryfolders.vdf");
        fs::write(&file, "original").unwrap();
        (dir, file)
    }

    fn named(file: &Path, suffix: &str) -> PathBuf {
        let mut s = file.as_os_str().to_os_string();
        s.push(suffix);
        PathBuf::from(s)
    }

    #[test]
    fn test_first_backup_is_dot_old() {
        let (_dir, file) = setup();
        assert_eq!(backup_candidate(&file), named(&file, ".old"));
    }

    #[test]
    fn test_collisions_compound() {
        let (_dir, file) = setup();
        fs::write(named(&file, ".old"), "a").unwrap();
        assert_eq!(backup_candidate(&file), named(&file, ".old.1"));

        fs::write(named(&file, ".old.1"), "b").unwrap();
        assert_eq!(backup_candidate(&file), named(&file, ".old.1.2"));

        fs::write(named(&file, ".old.1.2"), "c").unwrap();
        assert_eq!(backup_candidate(&file), named(&file, ".old.1.2.3"));
    }

    #[test]
    fn test_unrelated_numbering_is_not_followed() {
        let (_dir, file) = setup();
        fs::write(named(&file, ".old"), "a").unwrap();
        // `.old.2` is not part of the chain and does not block `.old.1`
        fs::write(named(&file, ".old.2"), "x").unwrap();
        assert_eq!(backup_candidate(&file), named(&file, ".old.1"));
    }

    #[test]
    fn test_make_backup_copies_content() {
        let (_dir, file) = setup();
        let backup = make_backup(&file).unwrap();
        assert_eq!(fs::read_to_string(&backup).unwrap(), "original");
        assert_eq!(fs::read_to_string(&file).unwrap(), "original");
    }

    #[test]
    fn test_make_backup_missing_source() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("missing.vdf");
        let err = make_backup(&file).unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
        assert!(!named(&file, ".old").exists());
    }

    #[test]
    fn test_list_backups_follows_chain() {
        let (_dir, file) = setup();
        assert!(list_backups(&file).is_empty());

        make_backup(&file).unwrap();
        make_backup(&file).unwrap();
        make_backup(&file).unwrap();

        assert_eq!(
            list_backups(&file),
            vec![
                named(&file, ".old"),
                named(&file, ".old.1"),
                named(&file, ".old.1.2"),
            ]
        );
    }
}
