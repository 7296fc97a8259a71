//! Format trait and heading lookup for positioning sections by title.
//!
//! The `Format` trait abstracts over document formats by providing the tree-sitter
//! language and a query that captures heading titles.

use crate::error::{Error, Result};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

pub mod markdown;

/// Tree-sitter grammar and heading query for one document format.
pub trait Format {
    /// Grammar used to parse documents of this format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing the title text of every heading as `@title`.
    fn title_query(&self) -> &str;
}

/// Locate the first heading whose title equals `title`.
///
/// Titles are compared after trimming whitespace and any closing `#` sequence.
/// Returns the 1-based line number of the heading, so it can be used directly as an
/// "after line" position.
///
/// # Errors
///
/// Returns [`Error::Format`] if the grammar or query cannot be loaded.
pub fn find_heading_line(text: &str, title: &str, format: &impl Format) -> Result<Option<usize>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| Error::Format(e.to_string()))?;

    let Some(tree) = parser.parse(text, None) else {
        return Err(Error::Format("parser produced no tree".to_string()));
    };

    let query =
        Query::new(&language, format.title_query()).map_err(|e| Error::Format(e.to_string()))?;
    let Some(title_index) = query.capture_index_for_name("title") else {
        return Err(Error::Format("query has no @title capture".to_string()));
    };

    let wanted = title.trim();
    let bytes = text.as_bytes();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), bytes);

    while let Some(m) = matches.next() {
        for capture in m.captures.iter().filter(|c| c.index == title_index) {
            let Ok(found) = capture.node.utf8_text(bytes) else {
                continue;
            };
            if normalise_title(found) == wanted {
                return Ok(Some(capture.node.start_position().row + 1));
            }
        }
    }

    Ok(None)
}

fn normalise_title(raw: &str) -> &str {
    raw.trim().trim_end_matches('#').trim_end()
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
