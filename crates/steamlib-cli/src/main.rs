//! steamlib CLI - edit Steam's library folder list
//!
//! Provides `steamlib list`, `steamlib add`, `steamlib remove`, and friends.

mod commands;
mod process;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commands::library::{self, LibraryArgs};

#[derive(Parser)]
#[command(name = "steamlib")]
#[command(about = "steamlib - Steam library folder editor")]
#[command(version)]
struct Cli {
    /// Library file to edit (overrides --steam-dir and discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Steam installation directory
    #[arg(long, global = true, value_name = "DIR")]
    steam_dir: Option<PathBuf>,

    /// Write even if Steam appears to be running (not recommended)
    #[arg(long, global = true)]
    ignore_running: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List library folders
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add library folders and save
    Add {
        /// Folders to append
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
        /// Preview changes without applying
        #[arg(long)]
        dry_run: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a library folder and save
    Remove {
        /// Slot number (1-based) or exact folder path
        target: String,
        /// Preview changes without applying
        #[arg(long)]
        dry_run: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace all library folders and save
    Set {
        /// Folders in slot order
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
        /// Preview changes without applying
        #[arg(long)]
        dry_run: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List backups of the library file
    Backups {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which library file would be edited
    Locate,
}

fn main() {
    // Level is overridden by `RUST_LOG`
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let args = LibraryArgs {
        file: cli.file,
        steam_dir: cli.steam_dir,
        ignore_running: cli.ignore_running,
    };

    let result = match cli.command {
        Commands::List { json } => library::list(&args, json),
        Commands::Add {
            paths,
            dry_run,
            json,
        } => library::add(&args, paths, dry_run, json),
        Commands::Remove {
            target,
            dry_run,
            json,
        } => library::remove(&args, &target, dry_run, json),
        Commands::Set {
            paths,
            dry_run,
            json,
        } => library::set(&args, paths, dry_run, json),
        Commands::Backups { json } => library::backups(&args, json),
        Commands::Locate => library::locate(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
