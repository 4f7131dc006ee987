//! Document model — ordered lines with a lines-per-page mapping.

/// A document as an ordered sequence of lines, indexed 0..N-1.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split raw text into lines. CRLF breaks are normalized to `\n` first;
    /// a lone `\r` is left alone.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n");
        Self {
            lines: normalized.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Display page for a 0-based line index. Pages are 1-based.
    ///
    /// This is a display approximation, not real pagination metadata: page
    /// boundaries fall every `lines_per_page` lines regardless of layout.
    pub fn page_for_line(&self, index: usize, lines_per_page: usize) -> usize {
        index / lines_per_page.max(1) + 1
    }
}
