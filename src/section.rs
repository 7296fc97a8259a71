//! Marker-delimited sections of a text document.
//!
//! A section is the span between a `<!-- START_SECTION:ID -->` line and the matching
//! `<!-- END_SECTION:ID -->` line. Markers are compared byte-for-byte after trimming the
//! surrounding whitespace of the candidate line, never inside the marker itself.

use crate::error::{Error, Result};
use std::fmt;

/// Identifier accepted for backward compatibility and rewritten to [`BADGES_SECTION_ID`].
pub const LEGACY_BADGES_ID: &str = "BADGES";
/// Canonical identifier of the badges section.
pub const BADGES_SECTION_ID: &str = "BADGES_SECTION";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Non-empty section identifier with the legacy alias already normalised.
pub struct SectionId(String);

impl SectionId {
    /// Validate and normalise a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the identifier is empty.
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::InvalidRequest(
                "section identifier is required".to_string(),
            ));
        }
        if raw == LEGACY_BADGES_ID {
            return Ok(Self(BADGES_SECTION_ID.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    /// The normalised identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    /// Build the start and end marker lines for this identifier.
    pub fn markers(&self) -> Markers {
        Markers {
            start: format!("<!-- START_SECTION:{} -->", self.0),
            end: format!("<!-- END_SECTION:{} -->", self.0),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Exact delimiter lines for one section identifier.
pub struct Markers {
    /// Line opening the section.
    pub start: String,
    /// Line closing the section.
    pub end: String,
}

impl Markers {
    #[must_use]
    /// Whether `line` is the start marker once surrounding whitespace is removed.
    pub fn is_start(&self, line: &str) -> bool {
        line.trim() == self.start
    }

    #[must_use]
    /// Whether `line` is the end marker once surrounding whitespace is removed.
    pub fn is_end(&self, line: &str) -> bool {
        line.trim() == self.end
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One occurrence of a section within a document.
pub struct Section {
    /// 0-based line index of the start marker.
    pub start_line: usize,
    /// 0-based line index of the end marker.
    pub end_line: usize,
    /// Lines strictly between the markers, joined with `\n`.
    pub body: String,
}

impl Section {
    #[must_use]
    /// Inclusive line span covered by the section, markers included.
    pub fn span(&self) -> (usize, usize) {
        (self.start_line, self.end_line)
    }
}

#[must_use]
/// Find every complete section delimited by `markers`, in document order.
///
/// A start marker opens a candidate and a later start marker replaces an unclosed one.
/// End markers without an open candidate are ignored, as is a trailing unclosed start.
pub fn find_sections(lines: &[String], markers: &Markers) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut open: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        if markers.is_start(line) {
            open = Some(i);
        } else if markers.is_end(line) {
            if let Some(start) = open.take() {
                sections.push(Section {
                    start_line: start,
                    end_line: i,
                    body: lines[start + 1..i].join("\n"),
                });
            }
        }
    }

    if let Some(start) = open {
        tracing::debug!(line = start + 1, "ignoring unterminated start marker");
    }

    sections
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
