//! Documents as an ordered sequence of lines.
//!
//! Text is split on `\n` only, so a trailing newline becomes a trailing empty line and
//! rendering reproduces the input byte-for-byte.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Line-oriented view of a text file.
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    #[must_use]
    /// Split `text` into lines on `\n`.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    #[must_use]
    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Number of text lines, not counting the empty line after a final newline.
    pub fn line_count(&self) -> usize {
        match self.lines.last() {
            Some(last) if last.is_empty() => self.lines.len() - 1,
            _ => self.lines.len(),
        }
    }

    #[must_use]
    /// Whether the document holds no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove each inclusive `(start, end)` span of line indices.
    ///
    /// All spans refer to the same snapshot of the document: they are excised from the
    /// highest start line to the lowest so earlier removals never shift later ones.
    /// Spans reaching past the end are truncated.
    pub fn remove_spans(&mut self, spans: &[(usize, usize)]) {
        let mut ordered = spans.to_vec();
        ordered.sort_unstable_by(|a, b| b.0.cmp(&a.0));

        for (start, end) in ordered {
            if start >= self.lines.len() || end < start {
                continue;
            }
            let end = end.min(self.lines.len() - 1);
            self.lines.drain(start..=end);
        }
    }

    /// Insert `block` so that its first line lands at `position`.
    ///
    /// Positions past the end append. Returns the index actually used.
    pub fn insert_block(&mut self, position: usize, block: Vec<String>) -> usize {
        let position = position.min(self.lines.len());
        self.lines.splice(position..position, block);
        position
    }

    #[must_use]
    /// Join the lines back together with `\n`.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
