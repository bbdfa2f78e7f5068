//! Library folder CLI commands
//!
//! Handles: steamlib list/add/remove/set/backups/locate

use serde_json::json;
use std::path::PathBuf;

use steamlib_core::backup::list_backups;
use steamlib_core::steam::resolve_library_file;
use steamlib_core::LibrarySession;

use crate::process::ensure_steam_stopped;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Where to find the library file, and whether to write while Steam runs
pub struct LibraryArgs {
    pub file: Option<PathBuf>,
    pub steam_dir: Option<PathBuf>,
    pub ignore_running: bool,
}

impl LibraryArgs {
    fn open(&self) -> Result<LibrarySession, Box<dyn std::error::Error>> {
        let path = resolve_library_file(self.file.as_deref(), self.steam_dir.as_deref())?;
        Ok(LibrarySession::load(path)?)
    }
}

/// `steamlib list`
pub fn list(args: &LibraryArgs, as_json: bool) -> CmdResult {
    let session = args.open()?;

    if as_json {
        let output = json!({
            "file": session.file(),
            "paths": session.paths(),
            "skipped_lines": session.skipped(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Library file: {}", session.file().display());
    if session.paths().is_empty() {
        println!("No library folders found.");
    } else {
        println!("Library folders:");
        for (i, path) in session.paths().iter().enumerate() {
            println!("  {}: {}", i + 1, path);
        }
    }
    if !session.skipped().is_empty() {
        println!(
            "\nWarning: {} unrecognised line(s) will be dropped on the next save:",
            session.skipped().len()
        );
        for skipped in session.skipped() {
            println!("  line {}: {}", skipped.line, skipped.text);
        }
    }
    Ok(())
}

/// `steamlib add`
pub fn add(args: &LibraryArgs, paths: Vec<String>, dry_run: bool, as_json: bool) -> CmdResult {
    let mut session = args.open()?;
    for path in paths {
        session.add_path(path)?;
    }
    save(args, &session, dry_run, as_json)
}

/// `steamlib remove`
pub fn remove(args: &LibraryArgs, target: &str, dry_run: bool, as_json: bool) -> CmdResult {
    let mut session = args.open()?;

    if session.paths().is_empty() {
        return Err("There are no library folders to remove".into());
    }

    let removed = match target.parse::<usize>() {
        Ok(0) => return Err("Slot numbers start at 1".into()),
        Ok(slot) => session.remove_path(slot - 1)?,
        Err(_) => {
            session.remove_path_value(target)?;
            target.to_string()
        }
    };

    if !as_json {
        println!("Removing: {removed}");
    }
    save(args, &session, dry_run, as_json)
}

/// `steamlib set`
pub fn set(args: &LibraryArgs, paths: Vec<String>, dry_run: bool, as_json: bool) -> CmdResult {
    let mut session = args.open()?;
    session.set_paths(paths);
    save(args, &session, dry_run, as_json)
}

/// `steamlib backups`
pub fn backups(args: &LibraryArgs, as_json: bool) -> CmdResult {
    let file = resolve_library_file(args.file.as_deref(), args.steam_dir.as_deref())?;
    let found = list_backups(&file);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else if found.is_empty() {
        println!("No backups found.");
    } else {
        println!("Backups:");
        for path in found {
            println!("  {}", path.display());
        }
    }
    Ok(())
}

/// `steamlib locate`
pub fn locate(args: &LibraryArgs) -> CmdResult {
    let file = resolve_library_file(args.file.as_deref(), args.steam_dir.as_deref())?;
    println!("{}", file.display());
    Ok(())
}

/// Show the pending change, or back up and write it
fn save(args: &LibraryArgs, session: &LibrarySession, dry_run: bool, as_json: bool) -> CmdResult {
    if dry_run {
        let diff = session.diff()?;
        if as_json {
            let output = json!({
                "dry_run": true,
                "file": session.file(),
                "paths": session.paths(),
                "diff": diff,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print!("{diff}");
            println!("\nDry run - no changes made.");
        }
        return Ok(());
    }

    ensure_steam_stopped(args.ignore_running)?;
    let report = session.commit()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Wrote {} library folder(s) to {}",
            report.slots,
            report.file.display()
        );
        println!("Backup created: {}", report.backup_path.display());
    }
    Ok(())
}
