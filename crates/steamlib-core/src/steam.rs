//! Locating the Steam installation and its library file

use crate::error::{LibraryError, LibraryResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides Steam directory discovery
pub const STEAM_DIR_ENV: &str = "STEAMLIB_STEAM_DIR";

/// Process names of a running Steam client
pub const STEAM_PROCESS_NAMES: &[&str] = &["steam.exe", "steam", "steam_osx"];

/// Library file location inside a Steam directory
#[must_use]
pub fn library_file(steam_dir: &Path) -> PathBuf {
    steam_dir.join("steamapps").join("libraryfolders.vdf")
}

/// Default install locations for the current platform, most likely first
#[must_use]
pub fn default_steam_dirs() -> Vec<PathBuf> {
    let mut dirs_out = Vec::new();

    if cfg!(windows) {
        if let Some(pf) = std::env::var_os("ProgramFiles(x86)") {
            dirs_out.push(PathBuf::from(pf).join("Steam"));
        }
        dirs_out.push(PathBuf::from(r"C:\Program Files (x86)\Steam"));
    }

    if let Some(home) = dirs::home_dir() {
        dirs_out.push(home.join(".steam").join("steam"));
    }
    // ~/.local/share on Linux, ~/Library/Application Support on macOS
    if let Some(data) = dirs::data_dir() {
        dirs_out.push(data.join("Steam"));
    }

    dirs_out
}

/// First candidate directory that contains a library file
#[must_use]
pub fn find_steam_dir_in(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find_map(|dir| {
        let found = library_file(dir).is_file();
        debug!(dir = %dir.display(), found, "checked steam directory");
        found.then(|| dir.clone())
    })
}

/// Locate the Steam directory from the environment or default locations
pub fn find_steam_dir() -> LibraryResult<PathBuf> {
    if let Some(dir) = std::env::var_os(STEAM_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    find_steam_dir_in(&default_steam_dirs()).ok_or(LibraryError::SteamDirNotFound)
}

/// Resolve which library file to edit
///
/// An explicit file wins over an explicit Steam directory, which wins over
/// discovery. The result must exist.
pub fn resolve_library_file(
    file: Option<&Path>,
    steam_dir: Option<&Path>,
) -> LibraryResult<PathBuf> {
    let path = match (file, steam_dir) {
        (Some(file), _) => file.to_path_buf(),
        (None, Some(dir)) => library_file(dir),
        (None, None) => library_file(&find_steam_dir()?),
    };

    if !path.is_file() {
        return Err(LibraryError::LibraryFileNotFound(path));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_steam() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("steamapps")).unwrap();
        fs::write(library_file(dir.path()), "\"LibraryFolders\"\n{\n}\n").unwrap();
        dir
    }

    #[test]
    fn test_library_file_layout() {
        let path = library_file(Path::new("steam"));
        assert!(path.ends_with("steamapps/libraryfolders.vdf"));
    }

    #[test]
    fn test_find_in_candidates() {
        let empty = TempDir::new().unwrap();
        let steam = fake_steam();
        let candidates = vec![empty.path().to_path_buf(), steam.path().to_path_buf()];

        assert_eq!(
            find_steam_dir_in(&candidates),
            Some(steam.path().to_path_buf())
        );
        assert_eq!(find_steam_dir_in(&candidates[..1]), None);
    }

    #[test]
    fn test_resolve_prefers_file() {
        let steam = fake_steam();
        let other = TempDir::new().unwrap();
        let file = other.path().join("custom.vdf");
        fs::write(&file, "").unwrap();

        let resolved = resolve_library_file(Some(&file), Some(steam.path())).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_resolve_from_steam_dir() {
        let steam = fake_steam();
        let resolved = resolve_library_file(None, Some(steam.path())).unwrap();
        assert_eq!(resolved, library_file(steam.path()));
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = resolve_library_file(None, Some(dir.path())).unwrap_err();
        assert_eq!(err.code(), "FILE_NOT_FOUND");
    }
}
