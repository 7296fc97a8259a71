//! Serialisable per-file outcome records.

use crate::update::Outcome;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// What happened to one section of one file.
pub struct Report {
    /// File the section lives in.
    pub file: PathBuf,
    /// Normalised section identifier.
    pub section_id: String,
    #[serde(flatten)]
    /// Effect of the update on the document.
    pub outcome: Outcome,
    /// Whether the target file did not exist before the update.
    pub created_file: bool,
    /// Whether the file was written to disk.
    pub written: bool,
}

impl Report {
    #[must_use]
    /// Status line for terminal output.
    pub fn status_line(&self) -> String {
        let mut line = self.outcome.message();
        if self.created_file && self.outcome.changed() {
            line = format!("Creating new file {} with section", self.file.display());
        }
        if self.outcome.changed() && !self.written {
            line.push_str(" (not written)");
        }
        line
    }
}
