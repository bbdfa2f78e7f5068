//! Error types for library file operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for library file operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors that can occur while loading, editing, or committing the library file
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Required section absent from the document
    #[error("Section '{0}' not found in library file")]
    MissingSection(String),

    /// Commit attempted with no library paths
    #[error("No library folders to write. Add at least one folder first")]
    EmptyPathList,

    /// Backup copy could not be made; the original file was not touched
    #[error("Failed to back up {path}: {message}")]
    BackupFailed { path: PathBuf, message: String },

    /// File I/O error
    #[error("I/O error for {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Path already present in the path list
    #[error("Library folder already listed: {0}")]
    DuplicatePath(String),

    /// Removal target not in the path list
    #[error("No such library folder: {0}")]
    NoSuchPath(String),

    /// The library file is not UTF-8 (e.g. saved in a Windows ANSI code page)
    #[error("Library file {0} is not valid UTF-8. Re-save it as UTF-8 and try again")]
    NotUtf8(PathBuf),

    /// The library file does not exist
    #[error("Library file not found: {0}")]
    LibraryFileNotFound(PathBuf),

    /// No Steam installation could be located
    #[error("Steam directory not found. Pass --steam-dir or set STEAMLIB_STEAM_DIR")]
    SteamDirNotFound,
}

impl LibraryError {
    /// Get the error code for CLI/JSON responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSection(_) => "MISSING_SECTION",
            Self::EmptyPathList => "EMPTY_PATH_LIST",
            Self::BackupFailed { .. } => "BACKUP_FAILED",
            Self::Io { .. } => "IO_ERROR",
            Self::DuplicatePath(_) => "DUPLICATE_PATH",
            Self::NoSuchPath(_) => "NOT_FOUND",
            Self::NotUtf8(_) => "NOT_UTF8",
            Self::LibraryFileNotFound(_) => "FILE_NOT_FOUND",
            Self::SteamDirNotFound => "STEAM_NOT_FOUND",
        }
    }

    /// Wrap an I/O error with the path it happened on
    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(LibraryError::EmptyPathList.code(), "EMPTY_PATH_LIST");
        assert_eq!(
            LibraryError::MissingSection("LibraryFolders".into()).code(),
            "MISSING_SECTION"
        );
    }

    #[test]
    fn test_io_carries_path() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let wrapped = LibraryError::io(Path::new("/tmp/x.vdf"), &err);
        assert!(wrapped.to_string().contains("/tmp/x.vdf"));
        assert_eq!(wrapped.code(), "IO_ERROR");
    }
}
