//! CLI command handlers
//!
//! Every command opens its own session on the library file, applies its
//! edit to the path list, and commits.

pub mod library;
