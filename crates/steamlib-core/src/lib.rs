//! steamlib core - libraryfolders.vdf model, parser, and commit pipeline
//!
//! This crate provides the document model for Steam's library folder file,
//! extraction of the library paths the user edits, and a commit pipeline
//! that backs up the original file before overwriting it.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod backup;
pub mod commit;
pub mod diff;
pub mod document;
pub mod error;
pub mod extract;
pub mod parser;
pub mod serializer;
pub mod session;
pub mod steam;

pub use commit::CommitReport;
pub use document::{Document, Entry, Section};
pub use error::{LibraryError, LibraryResult};
pub use parser::{ParsedDocument, SkippedLine};
pub use session::{LibrarySession, SessionOptions};

/// Name of the section holding the library folder slots
pub const LIBRARY_SECTION: &str = "LibraryFolders";
