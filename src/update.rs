//! The section updater: a pure transform from current text to next text.
//!
//! Every call derives everything from the document it is given. Duplicate sections left
//! behind by interleaved writers are consolidated into one, and reapplying the same
//! request to its own output reports [`Outcome::Unchanged`].

use crate::document::Document;
use crate::error::{Error, Result};
use crate::formats::{self, markdown::MarkdownFormat};
use crate::section::{find_sections, Section, SectionId};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File updated when a request names none.
pub const DEFAULT_TARGET_FILE: &str = "README.md";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Explicit placement requested for the section.
pub enum Anchor {
    /// Place the start marker immediately after this 1-based line.
    Line(usize),
    /// Place the start marker immediately after the heading with this title.
    Heading(String),
}

#[derive(Clone, Debug)]
/// A validated request to place `content` inside the section named `section_id`.
pub struct UpdateRequest {
    section_id: SectionId,
    content: String,
    anchor: Option<Anchor>,
    target_file: PathBuf,
}

impl UpdateRequest {
    /// Build a request, rejecting an empty identifier or empty content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if either argument is empty.
    pub fn new(section_id: &str, content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        if section_id.is_empty() || content.is_empty() {
            return Err(Error::InvalidRequest(
                "section identifier and content are required".to_string(),
            ));
        }
        Ok(Self {
            section_id: SectionId::new(section_id)?,
            content,
            anchor: None,
            target_file: PathBuf::from(DEFAULT_TARGET_FILE),
        })
    }

    #[must_use]
    /// Request placement after a 1-based line; `None` keeps the default placement.
    pub fn with_after_line(mut self, line: Option<usize>) -> Self {
        self.anchor = line.map(Anchor::Line);
        self
    }

    #[must_use]
    /// Request placement after the heading titled `title`.
    pub fn with_after_heading(mut self, title: impl Into<String>) -> Self {
        self.anchor = Some(Anchor::Heading(title.into()));
        self
    }

    #[must_use]
    /// Set the file this request targets.
    pub fn with_target_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_file = path.into();
        self
    }

    #[must_use]
    /// Normalised section identifier.
    pub fn section_id(&self) -> &SectionId {
        &self.section_id
    }

    #[must_use]
    /// Literal body placed between the markers.
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    /// Requested placement, if any.
    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    #[must_use]
    /// File this request targets.
    pub fn target_file(&self) -> &Path {
        &self.target_file
    }
}

#[must_use]
/// Parse a user-supplied 1-based line number.
///
/// Empty or non-numeric input means no position was requested.
pub fn parse_after_line(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<usize>() {
        Ok(line) => Some(line),
        Err(_) => {
            debug!(after_line = raw, "ignoring unparsable line position");
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
/// What an update did to the document.
pub enum Outcome {
    /// No section existed; one was added.
    Created,
    /// A single existing section was rewritten or moved.
    Updated,
    /// Several sections with the same identifier were merged into one.
    Consolidated {
        /// Number of sections found before the update.
        sections: usize,
    },
    /// The document already holds the requested section.
    Unchanged,
}

impl Outcome {
    #[must_use]
    /// Whether the document must be written back.
    pub fn changed(self) -> bool {
        self != Self::Unchanged
    }

    #[must_use]
    /// Human-readable status line.
    pub fn message(self) -> String {
        match self {
            Self::Created => "Added new section".to_string(),
            Self::Updated => "Updated existing section".to_string(),
            Self::Consolidated { sections } => {
                format!("Consolidated {sections} duplicate sections into one")
            }
            Self::Unchanged => "already up to date".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of applying a request to a document.
pub struct Update {
    /// Full text of the document after the update.
    pub text: String,
    /// What changed.
    pub outcome: Outcome,
}

impl Update {
    #[must_use]
    /// Whether `text` differs from the input and must be persisted.
    pub fn changed(&self) -> bool {
        self.outcome.changed()
    }
}

/// Apply `request` to the full text of a document.
///
/// An explicit position is resolved against the document with every section of the
/// requested identifier already removed, so duplicates above the insertion point do not
/// shift it. Without an explicit position the section stays where its first occurrence
/// was, or is appended when there is none.
///
/// # Errors
///
/// Returns [`Error::Format`] only if a heading anchor is requested and the markdown
/// parser cannot be initialised.
pub fn apply(document: &str, request: &UpdateRequest) -> Result<Update> {
    let markers = request.section_id().markers();
    let block = vec![
        markers.start.clone(),
        request.content().to_string(),
        markers.end.clone(),
    ];

    if document.is_empty() {
        return Ok(Update {
            text: format!("{}\n", block.join("\n")),
            outcome: Outcome::Created,
        });
    }

    let original = Document::parse(document);
    let sections = find_sections(original.lines(), &markers);
    debug!(
        section = %request.section_id(),
        found = sections.len(),
        "scanned document for sections"
    );

    let mut stripped = original;
    let spans: Vec<(usize, usize)> = sections.iter().map(Section::span).collect();
    stripped.remove_spans(&spans);

    let requested = resolve_anchor(request.anchor(), &stripped)?;
    let position = requested
        .or_else(|| sections.first().map(|s| s.start_line))
        .unwrap_or(stripped.len());

    if let [only] = sections.as_slice() {
        if only.body == request.content() && (requested.is_none() || only.start_line == position)
        {
            return Ok(Update {
                text: document.to_string(),
                outcome: Outcome::Unchanged,
            });
        }
    }

    stripped.insert_block(position, block);

    let outcome = match sections.len() {
        0 => Outcome::Created,
        1 => Outcome::Updated,
        n => Outcome::Consolidated { sections: n },
    };

    Ok(Update {
        text: stripped.render(),
        outcome,
    })
}

/// Turn the requested anchor into a 0-based insertion index, if it is usable.
fn resolve_anchor(anchor: Option<&Anchor>, stripped: &Document) -> Result<Option<usize>> {
    match anchor {
        None => Ok(None),
        Some(Anchor::Line(line)) => {
            if (1..=stripped.line_count()).contains(line) {
                Ok(Some(*line))
            } else {
                debug!(
                    after_line = line,
                    lines = stripped.line_count(),
                    "line position out of range, using default placement"
                );
                Ok(None)
            }
        }
        Some(Anchor::Heading(title)) => {
            let found = formats::find_heading_line(&stripped.render(), title, &MarkdownFormat)?;
            if found.is_none() {
                warn!(heading = %title, "heading not found, using default placement");
            }
            Ok(found)
        }
    }
}

#[cfg(test)]
#[path = "tests/update.rs"]
mod tests;
