//! mdsection: keep generated, marker-delimited sections of markdown files in sync.
//!
//! A section is the block between `<!-- START_SECTION:ID -->` and
//! `<!-- END_SECTION:ID -->`. Updating a section rewrites only that block, consolidates
//! duplicates left behind by earlier runs, and leaves the file untouched when it already
//! holds the requested content.

pub mod config;
pub mod document;
pub mod edit_plan;
pub mod error;
pub mod formats;
pub mod input;
pub mod report;
pub mod section;
pub mod update;

pub use error::{Error, Result};
pub use update::{apply, Outcome, Update, UpdateRequest};
