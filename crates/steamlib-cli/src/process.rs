//! Detection of a running Steam client
//!
//! Steam rewrites the library file on exit, so edits made while it runs
//! are lost.

use std::ffi::OsStr;
use steamlib_core::steam::STEAM_PROCESS_NAMES;
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

/// Name of the first running Steam process, if any
pub fn running_steam_process() -> Option<String> {
    let sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new()),
    );

    sys.processes().values().find_map(|process| {
        STEAM_PROCESS_NAMES
            .iter()
            .find(|name| process.name() == OsStr::new(name))
            .map(|name| (*name).to_string())
    })
}

/// Fail unless Steam is stopped or the user asked to proceed anyway
pub fn ensure_steam_stopped(ignore_running: bool) -> Result<(), Box<dyn std::error::Error>> {
    if ignore_running {
        return Ok(());
    }
    if let Some(name) = running_steam_process() {
        return Err(format!(
            "Cannot proceed because Steam is running ({name}). \
             Close it and try again, or pass --ignore-running (not recommended)"
        )
        .into());
    }
    Ok(())
}
