//! The edit plan batches section updates across files.
//!
//! A plan is a JSON document listing section updates. Edits are grouped by target file
//! and applied in order to the in-memory text, so each file is read once and written at
//! most once however many of its sections change.

use crate::error::{Error, Result};
use crate::input::{read_document, resolve_path, write_document};
use crate::report::Report;
use crate::update::{self, parse_after_line, UpdateRequest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
/// Serialisable collection of section updates for batch application.
pub struct EditPlan {
    /// Individual section updates, applied in order.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Content and placement for one section.
pub struct Edit {
    /// Identifier used in the section markers.
    pub section_id: String,
    /// New body for the section.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// 1-based line to place the section after, as a number or a string.
    pub after_line: Option<LinePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Heading to place the section after; takes precedence over `after_line`.
    pub after_heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Target file; the plan's default file when absent.
    pub file: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
/// Line position as written in a plan.
pub enum LinePosition {
    /// A plain number.
    Number(usize),
    /// Text parsed leniently; empty or non-numeric means no position.
    Text(String),
    /// Any other JSON value (negative, fractional, out of range); means no position.
    Other(serde_json::Value),
}

impl LinePosition {
    fn resolve(&self) -> Option<usize> {
        match self {
            Self::Number(line) => Some(*line),
            Self::Text(raw) => parse_after_line(raw),
            Self::Other(value) => {
                debug!(after_line = %value, "ignoring unusable line position");
                None
            }
        }
    }
}

impl Edit {
    /// Validate this edit into a request targeting `default_file` unless it names one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the identifier or content is empty.
    pub fn to_request(&self, default_file: &Path) -> Result<UpdateRequest> {
        let request = UpdateRequest::new(&self.section_id, self.content.clone())?
            .with_target_file(self.file.as_deref().unwrap_or(default_file));
        Ok(match &self.after_heading {
            Some(title) => request.with_after_heading(title.clone()),
            None => request
                .with_after_line(self.after_line.as_ref().and_then(LinePosition::resolve)),
        })
    }
}

impl EditPlan {
    /// Parse a plan from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Plan`] if the text is not a valid plan.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Plan(e.to_string()))
    }

    /// Read and parse a plan file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read or [`Error::Plan`] if it is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&text)
    }

    /// Apply all edits in the plan.
    ///
    /// Every edit is validated before any file is read. Edits are then grouped by file in
    /// first-seen order; each file is rewritten once if its final text differs from what
    /// was on disk and `dry_run` is false.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Plan`] naming the first invalid edit, or the first I/O or format
    /// error encountered. Files already written before an I/O error stay written.
    pub fn apply(&self, base: &Path, default_file: &Path, dry_run: bool) -> Result<Vec<Report>> {
        let mut requests = Vec::with_capacity(self.edits.len());
        for (i, edit) in self.edits.iter().enumerate() {
            let request = edit
                .to_request(default_file)
                .map_err(|e| Error::Plan(format!("edit {}: {e}", i + 1)))?;
            requests.push(request);
        }

        let mut order: Vec<PathBuf> = Vec::new();
        let mut file_groups: HashMap<PathBuf, Vec<&UpdateRequest>> = HashMap::new();
        for request in &requests {
            let path = resolve_path(base, request.target_file());
            if !file_groups.contains_key(&path) {
                order.push(path.clone());
            }
            file_groups.entry(path).or_default().push(request);
        }

        let mut reports = Vec::with_capacity(requests.len());
        for path in order {
            let existing = read_document(&path)?;
            let created_file = existing.is_none();
            let mut text = existing.clone().unwrap_or_default();
            let mut outcomes = Vec::new();

            for request in &file_groups[&path] {
                let update = update::apply(&text, request)?;
                outcomes.push((request.section_id().to_string(), update.outcome));
                text = update.text;
            }

            let written = existing.as_deref() != Some(text.as_str()) && !dry_run;
            if written {
                write_document(&path, &text)?;
            }
            info!(path = %path.display(), edits = outcomes.len(), written, "applied plan to file");

            reports.extend(outcomes.into_iter().map(|(section_id, outcome)| Report {
                file: path.clone(),
                section_id,
                outcome,
                created_file,
                written: written && outcome.changed(),
            }));
        }

        Ok(reports)
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
