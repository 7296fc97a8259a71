//! Markdown format implementation using tree-sitter-md.
//!
//! Only ATX-style headings (# syntax) are recognised as anchors.

use crate::formats::Format;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn title_query(&self) -> &'static str {
        "(atx_heading (inline) @title)"
    }
}
